//! 图索引
//!
//! 顶点内容到顶点 ID 的内存索引，支持 O(1) 查找

use crate::graph::vertex::VertexId;
use std::collections::HashMap;
use std::hash::Hash;

/// 顶点索引
#[derive(Debug, Clone)]
pub struct VertexIndex<T> {
    /// 内容到顶点 ID 的映射
    content_to_id: HashMap<T, VertexId>,
}

impl<T: Eq + Hash> VertexIndex<T> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            content_to_id: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            content_to_id: HashMap::with_capacity(capacity),
        }
    }

    /// 添加内容索引，内容已存在时返回 false 且不覆盖
    pub fn insert(&mut self, content: T, vertex_id: VertexId) -> bool {
        match self.content_to_id.entry(content) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(vertex_id);
                true
            }
        }
    }

    /// 通过内容查找顶点
    pub fn get(&self, content: &T) -> Option<VertexId> {
        self.content_to_id.get(content).copied()
    }

    pub fn contains(&self, content: &T) -> bool {
        self.content_to_id.contains_key(content)
    }

    pub fn len(&self) -> usize {
        self.content_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_to_id.is_empty()
    }
}

impl<T: Eq + Hash> Default for VertexIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
