//! 数据导入模块
//!
//! 从 CSV 边列表（source,target,weight，带表头）构建 `Graph<String>`

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 表头必须包含的列
const REQUIRED_COLUMNS: [&str; 3] = ["source", "target", "weight"];

/// 边记录（CSV 一行）
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: f64,
}

/// 边列表导入器
#[derive(Debug, Clone)]
pub struct EdgeListImporter {
    bidirectional: bool,
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListImporter {
    /// 创建导入器（默认添加双向边）
    pub fn new() -> Self {
        Self {
            bidirectional: true,
        }
    }

    /// 设置是否添加双向边
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// 从 CSV 文件导入
    pub fn import_csv<P: AsRef<Path>>(
        &self,
        graph: &mut Graph<String>,
        path: P,
    ) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_reader(graph, file)
    }

    /// 从任意读取器导入；格式错误的行计入 errors，不中断导入
    pub fn import_reader<R: Read>(
        &self,
        graph: &mut Graph<String>,
        reader: R,
    ) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let mut stats = ImportStats::default();

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::ImportError(format!("表头缺少列: {}", column)));
            }
        }

        for (line, record) in reader.deserialize::<EdgeRecord>().enumerate() {
            match record {
                Ok(record) => self.import_record(graph, record, &mut stats),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(line = line + 2, error = %e, "跳过格式错误的行");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "边列表导入完成");
        Ok(stats)
    }

    fn import_record(
        &self,
        graph: &mut Graph<String>,
        record: EdgeRecord,
        stats: &mut ImportStats,
    ) {
        if !record.weight.is_finite() {
            warn!(?record, "跳过非有限权重");
            stats.errors += 1;
            return;
        }

        match self.add_record(graph, &record, stats) {
            Ok(()) => stats.edges_imported += 1,
            Err(e) => {
                warn!(?record, error = %e, "边导入失败");
                stats.errors += 1;
            }
        }
    }

    fn add_record(
        &self,
        graph: &mut Graph<String>,
        record: &EdgeRecord,
        stats: &mut ImportStats,
    ) -> Result<()> {
        self.ensure_vertex(graph, &record.source, stats)?;
        self.ensure_vertex(graph, &record.target, stats)?;

        if self.bidirectional {
            graph.add_bidirectional_edge(&record.source, &record.target, record.weight)?;
        } else {
            graph.add_edge(&record.source, &record.target, record.weight)?;
        }
        Ok(())
    }

    fn ensure_vertex(
        &self,
        graph: &mut Graph<String>,
        content: &str,
        stats: &mut ImportStats,
    ) -> Result<VertexId> {
        let content = content.to_string();
        if let Some(id) = graph.find_vertex_id(&content) {
            return Ok(id);
        }
        let id = graph.add_vertex(content)?;
        stats.vertices_imported += 1;
        Ok(id)
    }
}

/// 从 CSV 文件构建新图
pub fn load_edge_list<P: AsRef<Path>>(
    path: P,
    bidirectional: bool,
) -> Result<(Graph<String>, ImportStats)> {
    let mut graph = Graph::new();
    let stats = EdgeListImporter::new()
        .with_bidirectional(bidirectional)
        .import_csv(&mut graph, path)?;
    Ok((graph, stats))
}
