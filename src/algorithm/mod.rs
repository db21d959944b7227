//! 图算法模块
//!
//! 包含 Prim 与 Kruskal 最小生成树算法及其依赖的优先队列、并查集

mod disjoint_set;
mod kruskal;
mod prim;
mod queue;
mod spanning_tree;

pub use disjoint_set::DisjointSet;
pub use kruskal::{Kruskal, KruskalConfig};
pub use prim::Prim;
pub use queue::{Distance, MutablePriorityQueue};
pub use spanning_tree::{spanning_tree_cost, SpanningTree, TreeEdge};
