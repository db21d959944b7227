//! 生成树结果
//!
//! 根据顶点的 path 字段重建树边并计算总权重

use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// 树边
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub parent: VertexId,
    pub child: VertexId,
    pub weight: f64,
}

/// 生成树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 根顶点（始终为顶点 0）
    pub root: VertexId,
    /// 树边（按子顶点 ID 排序）
    pub edges: Vec<TreeEdge>,
    /// 总权重
    pub total_weight: f64,
}

impl SpanningTree {
    /// 从图的当前 path 字段构建；空图返回 None
    pub fn from_graph<T>(graph: &Graph<T>) -> Option<Self>
    where
        T: Eq + Hash + Clone + Debug,
    {
        let root = graph.vertex_set().first()?.id();

        let edges: Vec<TreeEdge> = graph
            .vertex_set()
            .iter()
            .filter_map(|v| {
                let parent = v.path()?;
                let weight = tree_edge_weight(graph, parent, v.id())?;
                Some(TreeEdge {
                    parent,
                    child: v.id(),
                    weight,
                })
            })
            .collect();
        // 从 +0.0 开始累加，空迭代器的 sum 为 -0.0
        let total_weight = edges.iter().fold(0.0, |acc, e| acc + e.weight);

        Some(Self {
            root,
            edges,
            total_weight,
        })
    }

    /// 树覆盖的顶点数（含根）
    pub fn vertex_count(&self) -> usize {
        self.edges.len() + 1
    }
}

/// parent 与 child 之间最轻的边权重
fn tree_edge_weight<T>(graph: &Graph<T>, parent: VertexId, child: VertexId) -> Option<f64>
where
    T: Eq + Hash + Clone + Debug,
{
    graph
        .outgoing_edges(parent)
        .filter(|e| e.dest() == child)
        .map(|e| e.weight())
        .min_by(|a, b| a.total_cmp(b))
}

/// 当前 path 字段所表示的生成树总权重
pub fn spanning_tree_cost<T>(graph: &Graph<T>) -> f64
where
    T: Eq + Hash + Clone + Debug,
{
    graph
        .vertex_set()
        .iter()
        .filter_map(|v| tree_edge_weight(graph, v.path()?, v.id()))
        .fold(0.0, |acc, w| acc + w)
}
