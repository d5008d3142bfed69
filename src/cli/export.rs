//! # export 子命令 CLI 定义
//!
//! 将解析出的某一数据表导出为 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 可导出的数据表
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportTable {
    /// Atoms section (floating point)
    Atoms,
    /// Bonds section (integer)
    Bonds,
    /// Angles section (integer)
    Angles,
    /// Velocities section (floating point)
    Velocities,
    /// Masses table (type, mass)
    Masses,
}

impl std::fmt::Display for ExportTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportTable::Atoms => write!(f, "Atoms"),
            ExportTable::Bonds => write!(f, "Bonds"),
            ExportTable::Angles => write!(f, "Angles"),
            ExportTable::Velocities => write!(f, "Velocities"),
            ExportTable::Masses => write!(f, "Masses"),
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input LAMMPS data/restart file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Table to export
    #[arg(short, long, value_enum)]
    pub table: ExportTable,

    /// Output CSV file
    #[arg(short, long)]
    pub output: PathBuf,
}
