//! Prim 最小生成树算法
//!
//! 以顶点 0 为根，只覆盖根所在的连通分量；
//! 不可达顶点保持 dist = +inf、path = None

use super::queue::MutablePriorityQueue;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Prim 算法
pub struct Prim<'g, T> {
    graph: &'g mut Graph<T>,
}

impl<'g, T> Prim<'g, T>
where
    T: Eq + Hash + Clone + Debug,
{
    pub fn new(graph: &'g mut Graph<T>) -> Self {
        Self { graph }
    }

    /// 计算最小生成树，结果写入每个顶点的 dist / path 字段
    pub fn run(self) -> Result<&'g [Vertex<T>]> {
        let graph = self.graph;
        if graph.vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }

        for v in graph.vertices.iter_mut() {
            v.dist = f64::INFINITY;
            v.tree_parent = None;
            v.visited = false;
        }

        let root = VertexId::new(0);
        graph.vertices[root.index()].dist = 0.0;

        let mut queue = MutablePriorityQueue::new();
        queue.insert(root, 0.0);

        let mut reached = 0usize;
        while let Some(current) = queue.extract_min() {
            graph.vertices[current.index()].visited = true;
            reached += 1;

            for i in 0..graph.vertices[current.index()].adj().len() {
                let edge_id = graph.vertices[current.index()].adj()[i];
                let edge = &graph.edges[edge_id.index()];
                let dest = &mut graph.vertices[edge.dest().index()];
                if dest.visited || edge.weight() >= dest.dist {
                    continue;
                }

                let unreached = dest.dist == f64::INFINITY;
                dest.dist = edge.weight();
                dest.tree_parent = Some(current);
                if unreached {
                    queue.insert(dest.id(), dest.dist);
                } else {
                    queue.decrease_key(dest.id(), dest.dist);
                }
            }
        }

        debug!(vertices = graph.vertices.len(), reached, "Prim 计算完成");

        let graph: &'g Graph<T> = graph;
        Ok(&graph.vertices)
    }
}
