//! Kruskal 最小生成树算法
//!
//! 要求所有边通过 `add_bidirectional_edge` 添加。结果与 Prim 相同：
//! 生成树由各顶点的 path 字段表示（根为 None），
//! 另外被选中的边及其反向边的 selected 标志为 true

use super::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, Vertex, VertexId};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Kruskal 配置
#[derive(Debug, Clone)]
pub struct KruskalConfig {
    /// 选满 V-1 条边后停止扫描
    pub stop_at_spanning_size: bool,
}

impl Default for KruskalConfig {
    fn default() -> Self {
        Self {
            stop_at_spanning_size: true,
        }
    }
}

/// Kruskal 算法
pub struct Kruskal<'g, T> {
    graph: &'g mut Graph<T>,
    config: KruskalConfig,
}

impl<'g, T> Kruskal<'g, T>
where
    T: Eq + Hash + Clone + Debug,
{
    pub fn new(graph: &'g mut Graph<T>) -> Self {
        Self::with_config(graph, KruskalConfig::default())
    }

    pub fn with_config(graph: &'g mut Graph<T>, config: KruskalConfig) -> Self {
        Self { graph, config }
    }

    /// 计算最小生成树
    ///
    /// 非连通图只为顶点 0 所在分量重建 path，其余顶点的 path 为 None。
    pub fn run(self) -> Result<&'g [Vertex<T>]> {
        let graph = self.graph;
        if graph.vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }
        if let Some(edge) = graph.edges.iter().find(|e| e.reverse.is_none()) {
            return Err(Error::NotBidirectional(format!(
                "{:?} -> {:?}",
                graph.vertices[edge.orig().index()].content(),
                graph.vertices[edge.dest().index()].content()
            )));
        }

        for edge in graph.edges.iter_mut() {
            edge.selected = false;
        }

        let target = graph.vertices.len() - 1;
        let mut set = DisjointSet::new(&mut graph.vertices);

        // 每对互逆边只保留起点序号较小的一条
        let mut candidates: Vec<EdgeId> = graph
            .edges
            .iter()
            .filter(|e| set.tag(e.orig()) < set.tag(e.dest()))
            .map(|e| e.id())
            .collect();
        candidates.sort_by(|a, b| {
            graph.edges[a.index()]
                .weight()
                .total_cmp(&graph.edges[b.index()].weight())
        });

        let mut selected = 0usize;
        for edge_id in candidates {
            if self.config.stop_at_spanning_size && selected == target {
                break;
            }

            let (orig, dest, reverse) = {
                let edge = &graph.edges[edge_id.index()];
                (edge.orig(), edge.dest(), edge.reverse)
            };
            if !set.union(orig, dest) {
                continue;
            }

            trace!(?orig, ?dest, "选中边");
            graph.edges[edge_id.index()].selected = true;
            if let Some(reverse) = reverse {
                graph.edges[reverse.index()].selected = true;
            }
            selected += 1;
        }

        let components = set.root_count();
        debug!(
            vertices = graph.vertices.len(),
            selected, components, "Kruskal 计算完成"
        );

        rebuild_tree_paths(graph);

        let graph: &'g Graph<T> = graph;
        Ok(&graph.vertices)
    }
}

/// 从顶点 0 出发沿选中边深度优先遍历，设置 path 字段
fn rebuild_tree_paths<T>(graph: &mut Graph<T>) {
    for v in graph.vertices.iter_mut() {
        v.visited = false;
        v.tree_parent = None;
    }

    let root = VertexId::new(0);
    graph.vertices[root.index()].visited = true;
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        for i in 0..graph.vertices[current.index()].adj().len() {
            let edge_id = graph.vertices[current.index()].adj()[i];
            let edge = &graph.edges[edge_id.index()];
            if !edge.selected {
                continue;
            }
            let dest = &mut graph.vertices[edge.dest().index()];
            if dest.visited {
                continue;
            }
            dest.visited = true;
            dest.tree_parent = Some(current);
            stack.push(dest.id());
        }
    }
}
