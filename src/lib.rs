//! mstgraph - 内存图与最小生成树
//!
//! 泛型邻接表图，支持：
//! - 按内容添加顶点、有向边与双向边
//! - Prim 算法（可变优先队列）
//! - Kruskal 算法（按秩合并、路径压缩的并查集）
//! - CSV 边列表导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{Kruskal, KruskalConfig, Prim, SpanningTree, TreeEdge};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
