//! # 统一错误处理模块
//!
//! 定义 Lmpread 的所有错误类型，使用 `thiserror` 派生。
//!
//! 解析错误一律中止整个解析过程；不存在部分解析的文档。
//! 仅有两处静默默认值：header 第 3~6 行缺失时 bond/angle 计数取 0，
//! 段标签缺失时对应数据表记为 absent。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Lmpread 统一错误类型
#[derive(Error, Debug)]
pub enum LmpreadError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed header: {reason}")]
    MalformedHeader { reason: String },

    #[error("Masses section truncated: expected {expected} rows, found {found}")]
    TruncatedMasses { expected: usize, found: usize },

    #[error("Section '{section}' truncated: expected {expected} rows, found {found}")]
    TruncatedSection {
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("Non-numeric token '{token}' in section '{section}' (row {row})")]
    NonNumericToken {
        section: String,
        row: usize,
        token: String,
    },

    #[error("Ragged row in section '{section}': row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Section '{0}' is not present in the file")]
    SectionAbsent(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LmpreadError>;
