//! # 数据模型模块
//!
//! 定义 restart 文件解析结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: restart

pub mod restart;

pub use restart::{BoxDimensions, Header, RestartDocument, Summary};
