//! # 解析器模块
//!
//! 提供 LAMMPS restart/data 文本格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: restart

pub mod restart;

pub use restart::{parse_restart_content, parse_restart_file};
