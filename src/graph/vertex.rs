//! 顶点定义
//!
//! 顶点保存用户内容、出边列表以及生成树算法使用的临时字段

use crate::graph::edge::EdgeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 顶点 ID（图内顶点数组的稳定下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<T> {
    /// 顶点 ID
    id: VertexId,
    /// 顶点内容（图内唯一）
    content: T,
    /// 出边
    adj: SmallVec<[EdgeId; 4]>,
    /// 是否已访问
    pub(crate) visited: bool,
    /// 到生成树的距离（Prim 的队列键）
    pub(crate) dist: f64,
    /// 生成树中的父顶点
    pub(crate) tree_parent: Option<VertexId>,
    /// 并查集父指针
    pub(crate) set_parent: VertexId,
    /// Kruskal 运行时分配的序号
    pub(crate) tag: usize,
    /// 并查集秩
    pub(crate) rank: u32,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId, content: T) -> Self {
        Self {
            id,
            content,
            adj: SmallVec::new(),
            visited: false,
            dist: 0.0,
            tree_parent: None,
            set_parent: id,
            tag: 0,
            rank: 0,
        }
    }

    /// 追加一条出边
    pub(crate) fn push_edge(&mut self, edge: EdgeId) {
        self.adj.push(edge);
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点内容
    pub fn content(&self) -> &T {
        &self.content
    }

    /// 获取出边（按添加顺序）
    pub fn adj(&self) -> &[EdgeId] {
        &self.adj
    }

    /// 上次算法运行留下的距离
    pub fn dist(&self) -> f64 {
        self.dist
    }

    /// 生成树中的父顶点，根或不可达顶点为 None
    pub fn path(&self) -> Option<VertexId> {
        self.tree_parent
    }

    pub fn visited(&self) -> bool {
        self.visited
    }
}
