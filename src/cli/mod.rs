//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `summary`: 解析并打印摘要报告
//! - `export`: 导出数据表为 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: summary, export

pub mod export;
pub mod summary;

use clap::{Parser, Subcommand};

/// Lmpread - LAMMPS 数据文件检查工具
#[derive(Parser)]
#[command(name = "lmpread")]
#[command(version)]
#[command(about = "A LAMMPS restart/data file inspection toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a data/restart file and print a summary report
    Summary(summary::SummaryArgs),

    /// Export one parsed table to a CSV file
    Export(export::ExportArgs),
}
