//! 边定义
//!
//! 有向带权边，由起点顶点持有；双向边成对出现并互相记录

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边 ID（图内边数组的稳定下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点
    orig: VertexId,
    /// 终点
    dest: VertexId,
    /// 权重
    weight: f64,
    /// 是否被 Kruskal 选入生成树
    pub(crate) selected: bool,
    /// 反向边（仅双向边）
    pub(crate) reverse: Option<EdgeId>,
}

impl Edge {
    /// 创建新边
    pub(crate) fn new(id: EdgeId, orig: VertexId, dest: VertexId, weight: f64) -> Self {
        Self {
            id,
            orig,
            dest,
            weight,
            selected: false,
            reverse: None,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点
    pub fn orig(&self) -> VertexId {
        self.orig
    }

    /// 获取终点
    pub fn dest(&self) -> VertexId {
        self.dest
    }

    /// 获取权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 上次 Kruskal 运行后是否属于生成树
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// 获取反向边
    pub fn reverse(&self) -> Option<EdgeId> {
        self.reverse
    }
}
