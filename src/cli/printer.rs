//! 结果打印器
//!
//! 以表格或 JSON 格式输出生成树

use crate::algorithm::SpanningTree;
use crate::graph::{Graph, VertexId};
use prettytable::{format, row, Table};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印生成树
    pub fn print_tree<T>(&self, title: &str, graph: &Graph<T>, tree: &SpanningTree) -> String
    where
        T: Eq + Hash + Clone + Debug + Display,
    {
        match self.mode {
            PrintMode::Table => self.format_table(title, graph, tree),
            PrintMode::Json => self.format_json(title, graph, tree),
        }
    }

    fn format_table<T>(&self, title: &str, graph: &Graph<T>, tree: &SpanningTree) -> String
    where
        T: Eq + Hash + Clone + Debug + Display,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Parent", "Child", "Weight"]);

        for edge in &tree.edges {
            let parent = label(graph, edge.parent);
            let child = label(graph, edge.child);
            table.add_row(row![parent, child, edge.weight.to_string()]);
        }

        format!(
            "{}\n{}{} edge(s), total weight {} (root {})\n",
            title,
            table,
            tree.edges.len(),
            tree.total_weight,
            label(graph, tree.root)
        )
    }

    fn format_json<T>(&self, title: &str, graph: &Graph<T>, tree: &SpanningTree) -> String
    where
        T: Eq + Hash + Clone + Debug + Display,
    {
        let edges: Vec<_> = tree
            .edges
            .iter()
            .map(|e| {
                serde_json::json!({
                    "parent": label(graph, e.parent),
                    "child": label(graph, e.child),
                    "weight": e.weight,
                })
            })
            .collect();

        let value = serde_json::json!({
            "algorithm": title,
            "root": label(graph, tree.root),
            "edges": edges,
            "total_weight": tree.total_weight,
        });
        format!("{}\n", value)
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }
}

fn label<T>(graph: &Graph<T>, id: VertexId) -> String
where
    T: Eq + Hash + Clone + Debug + Display,
{
    graph
        .vertex(id)
        .map(|v| v.content().to_string())
        .unwrap_or_else(|| format!("#{}", id.index()))
}
