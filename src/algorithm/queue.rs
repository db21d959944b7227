//! 可变优先队列
//!
//! 按距离升序弹出顶点，支持 decrease-key。底层使用 `priority_queue`，
//! 它为每个元素记录堆内位置，调整优先级为 O(log n)

use crate::graph::VertexId;
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};

/// 全序的距离键
#[derive(Debug, Clone, Copy)]
pub struct Distance(pub f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 最小优先队列
pub struct MutablePriorityQueue {
    heap: PriorityQueue<VertexId, Reverse<Distance>>,
}

impl MutablePriorityQueue {
    pub fn new() -> Self {
        Self {
            heap: PriorityQueue::new(),
        }
    }

    /// 插入顶点；已在队列中时仅更新其距离
    pub fn insert(&mut self, id: VertexId, dist: f64) {
        self.heap.push(id, Reverse(Distance(dist)));
    }

    /// 弹出距离最小的顶点
    pub fn extract_min(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|(id, _)| id)
    }

    /// 顶点距离已减小，调整其在堆中的位置；顶点不在队列中时返回 false
    pub fn decrease_key(&mut self, id: VertexId, dist: f64) -> bool {
        self.heap
            .change_priority(&id, Reverse(Distance(dist)))
            .is_some()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.heap.get_priority(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for MutablePriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}
