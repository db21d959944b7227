//! 命令行输出辅助

mod printer;

pub use printer::{PrintMode, Printer};
