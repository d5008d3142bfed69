//! # export 子命令实现
//!
//! 将解析出的某一数据表写入 CSV 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `parsers/restart.rs`
//! - 使用 `utils/output.rs`

use crate::cli::export::{ExportArgs, ExportTable};
use crate::error::{LmpreadError, Result};
use crate::parsers::restart;
use crate::utils::output;

use std::path::Path;

/// 执行 export
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_info(&format!("Parsing '{}'...", args.input.display()));
    let doc = restart::parse_restart_file(&args.input)?;

    let row_count = match args.table {
        ExportTable::Atoms => write_table(require(&doc.atoms, args.table)?, &args.output)?,
        ExportTable::Bonds => write_table(require(&doc.bonds, args.table)?, &args.output)?,
        ExportTable::Angles => write_table(require(&doc.angles, args.table)?, &args.output)?,
        ExportTable::Velocities => {
            write_table(require(&doc.velocities, args.table)?, &args.output)?
        }
        ExportTable::Masses => write_masses(&doc.masses, &args.output)?,
    };

    if row_count == 0 {
        output::print_warning(&format!("Table '{}' has no data rows", args.table));
    }
    output::print_success(&format!(
        "{} rows written to '{}'",
        row_count,
        args.output.display()
    ));

    Ok(())
}

/// 取出数据表；段缺失时返回错误（区别于解析错误）
fn require<T>(table: &Option<Vec<Vec<T>>>, kind: ExportTable) -> Result<&[Vec<T>]> {
    table
        .as_deref()
        .ok_or_else(|| LmpreadError::SectionAbsent(kind.to_string()))
}

/// 写出无表头的数值表
fn write_table<T: std::fmt::Display>(table: &[Vec<T>], output_path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(LmpreadError::CsvError)?;

    for row in table {
        let record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        wtr.write_record(&record).map_err(LmpreadError::CsvError)?;
    }

    wtr.flush().map_err(|e| LmpreadError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(table.len())
}

/// 写出质量表 (type, mass)
fn write_masses(masses: &[f64], output_path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(LmpreadError::CsvError)?;

    wtr.write_record(["type", "mass"])
        .map_err(LmpreadError::CsvError)?;

    for (i, mass) in masses.iter().enumerate() {
        wtr.write_record(&[(i + 1).to_string(), format!("{:.10}", mass)])
            .map_err(LmpreadError::CsvError)?;
    }

    wtr.flush().map_err(|e| LmpreadError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(masses.len())
}
