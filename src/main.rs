//! # Lmpread - LAMMPS 数据文件检查工具
//!
//! 读取 LAMMPS restart/data 文本文件，解析为类型化的内存表格，
//! 并以终端摘要或 CSV 形式输出。
//!
//! ## 子命令
//! - `summary` - 解析文件并打印摘要报告（计数、盒子尺寸、质量、各数据表）
//! - `export`  - 将某一数据表导出为 CSV 文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (restart 文件解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
