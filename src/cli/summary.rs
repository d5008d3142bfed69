//! # summary 子命令 CLI 定义
//!
//! 解析 LAMMPS data/restart 文件并打印摘要报告。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use clap::Args;
use std::path::PathBuf;

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Input LAMMPS data/restart file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Preview the first N data rows of each present section (0 = none)
    #[arg(short, long, default_value_t = 0)]
    pub preview: usize,
}
