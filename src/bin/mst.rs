//! 最小生成树命令行工具
//!
//! 读取 CSV 边列表（source,target,weight），计算并打印最小生成树

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mstgraph::cli::{PrintMode, Printer};
use mstgraph::import::load_edge_list;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Prim,
    Kruskal,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "mst")]
#[command(about = "计算 CSV 边列表的最小生成树")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 使用的算法
    #[arg(short, long, value_enum, default_value = "both")]
    algorithm: Algorithm,

    /// 按有向边导入（仅适用于 Prim）
    #[arg(long)]
    directed: bool,

    /// 以 JSON 格式输出
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.directed && args.algorithm != Algorithm::Prim {
        anyhow::bail!("Kruskal 需要双向边，--directed 只能与 --algorithm prim 一起使用");
    }

    let (mut graph, stats) = load_edge_list(&args.input, !args.directed)
        .with_context(|| format!("无法读取 {:?}", args.input))?;
    if stats.errors > 0 {
        tracing::warn!(errors = stats.errors, "部分行未能导入");
    }

    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    if !args.json {
        println!("{}", printer.print_stats(graph.num_vertex(), graph.num_edges()));
    }

    if matches!(args.algorithm, Algorithm::Prim | Algorithm::Both) {
        graph.calculate_prim()?;
        if let Some(tree) = graph.spanning_tree() {
            print!("{}", printer.print_tree("prim", &graph, &tree));
        }
    }

    if matches!(args.algorithm, Algorithm::Kruskal | Algorithm::Both) {
        graph.calculate_kruskal()?;
        if let Some(tree) = graph.spanning_tree() {
            print!("{}", printer.print_tree("kruskal", &graph, &tree));
        }
    }

    Ok(())
}
