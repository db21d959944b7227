//! 图数据结构
//!
//! 基于数组（arena）的邻接表图：图持有全部顶点和边，
//! 边通过 ID 引用终点和反向边，不存在悬垂引用

use super::edge::{Edge, EdgeId};
use super::index::VertexIndex;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{spanning_tree_cost, Kruskal, Prim, SpanningTree};
use crate::error::{Error, Result};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 图
///
/// 下标 0 处的顶点（第一个插入的顶点）是 Prim 和 Kruskal 的根。
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点集合（插入顺序）
    pub(crate) vertices: Vec<Vertex<T>>,
    /// 边集合
    pub(crate) edges: Vec<Edge>,
    /// 内容索引
    index: VertexIndex<T>,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            index: VertexIndex::new(),
        }
    }

    /// 预分配顶点容量
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::new(),
            index: VertexIndex::with_capacity(vertices),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 内容已存在时返回 `Error::VertexAlreadyExists`，图保持不变。
    pub fn add_vertex(&mut self, content: T) -> Result<VertexId> {
        let id = VertexId::new(self.vertices.len());
        if !self.index.insert(content.clone(), id) {
            debug!(?content, "拒绝重复顶点");
            return Err(Error::VertexAlreadyExists(format!("{:?}", content)));
        }
        self.vertices.push(Vertex::new(id, content));
        Ok(id)
    }

    /// 通过内容查找顶点
    pub fn find_vertex(&self, content: &T) -> Option<&Vertex<T>> {
        self.index.get(content).map(|id| &self.vertices[id.index()])
    }

    /// 通过内容查找顶点 ID
    pub fn find_vertex_id(&self, content: &T) -> Option<VertexId> {
        self.index.get(content)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// 获取顶点数量
    pub fn num_vertex(&self) -> usize {
        self.vertices.len()
    }

    /// 获取全部顶点（插入顺序）
    pub fn vertex_set(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    // ==================== 边操作 ====================

    /// 添加有向边 source -> dest
    pub fn add_edge(&mut self, source: &T, dest: &T, weight: f64) -> Result<EdgeId> {
        let (src, dst) = self.resolve_endpoints(source, dest)?;
        Ok(self.push_edge(src, dst, weight))
    }

    /// 添加双向边，两条有向边互为反向边
    pub fn add_bidirectional_edge(
        &mut self,
        source: &T,
        dest: &T,
        weight: f64,
    ) -> Result<(EdgeId, EdgeId)> {
        let (src, dst) = self.resolve_endpoints(source, dest)?;

        let forward = self.push_edge(src, dst, weight);
        let backward = self.push_edge(dst, src, weight);

        self.edges[forward.index()].reverse = Some(backward);
        self.edges[backward.index()].reverse = Some(forward);

        Ok((forward, backward))
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// 获取全部边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取边数量（双向边计为两条）
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 获取顶点的所有出边
    pub fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices
            .get(id.index())
            .map(|v| v.adj())
            .unwrap_or_default()
            .iter()
            .map(move |e| &self.edges[e.index()])
    }

    fn resolve_endpoints(&self, source: &T, dest: &T) -> Result<(VertexId, VertexId)> {
        let src = self.index.get(source).ok_or_else(|| {
            debug!(?source, "起点不存在");
            Error::VertexNotFound(format!("{:?}", source))
        })?;
        let dst = self.index.get(dest).ok_or_else(|| {
            debug!(?dest, "终点不存在");
            Error::VertexNotFound(format!("{:?}", dest))
        })?;
        Ok((src, dst))
    }

    fn push_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(id, src, dst, weight));
        self.vertices[src.index()].push_edge(id);
        id
    }

    // ==================== 生成树 ====================

    /// Prim 算法，以顶点 0 为根
    pub fn calculate_prim(&mut self) -> Result<&[Vertex<T>]> {
        Prim::new(self).run()
    }

    /// Kruskal 算法（要求边由 add_bidirectional_edge 添加）
    pub fn calculate_kruskal(&mut self) -> Result<&[Vertex<T>]> {
        Kruskal::new(self).run()
    }

    /// 根据当前父指针重建生成树
    pub fn spanning_tree(&self) -> Option<SpanningTree> {
        SpanningTree::from_graph(self)
    }

    /// 当前父指针所表示的生成树总权重
    pub fn spanning_tree_cost(&self) -> f64 {
        spanning_tree_cost(self)
    }

    /// 被选中边的总权重（每条无向边被计两次，故除以 2）
    pub fn selected_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.selected)
            .fold(0.0, |acc, e| acc + e.weight())
            / 2.0
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
