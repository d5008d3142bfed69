//! # summary 子命令实现
//!
//! 解析 data/restart 文件，生成摘要视图并打印：计数表、盒子尺寸、
//! 质量与各数据表状态（行数或 absent）。
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `parsers/restart.rs`, `models/restart.rs`
//! - 使用 `utils/output.rs`

use crate::cli::summary::SummaryArgs;
use crate::error::Result;
use crate::models::Summary;
use crate::parsers::restart;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 计数表格行
#[derive(Debug, Clone, Tabled)]
struct CountRow {
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// 盒子尺寸表格行
#[derive(Debug, Clone, Tabled)]
struct BoxRow {
    #[tabled(rename = "Axis")]
    axis: &'static str,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Length")]
    length: String,
}

/// 执行 summary
pub fn execute(args: SummaryArgs) -> Result<()> {
    output::print_header("LAMMPS Data File Summary");
    output::print_info(&format!("Parsing '{}'...", args.input.display()));

    let doc = restart::parse_restart_file(&args.input)?;
    let summary = doc.summary();
    output::print_success("File parsed successfully");

    print_counts(&summary);
    print_box(&summary);
    print_masses(&summary);
    print_sections(&summary, args.preview);

    Ok(())
}

/// 打印 header 计数表
fn print_counts(summary: &Summary) {
    let rows = vec![
        CountRow { quantity: "Atoms", count: summary.atom_count },
        CountRow { quantity: "Atom Types", count: summary.atom_type_count },
        CountRow { quantity: "Bonds", count: summary.bond_count },
        CountRow { quantity: "Bond Types", count: summary.bond_type_count },
        CountRow { quantity: "Angles", count: summary.angle_count },
        CountRow { quantity: "Angle Types", count: summary.angle_type_count },
    ];

    println!("{}", Table::new(&rows));
}

/// 打印盒子尺寸表
fn print_box(summary: &Summary) {
    let rows: Vec<BoxRow> = ["x", "y", "z"]
        .into_iter()
        .zip(summary.box_dimensions)
        .map(|(axis, [low, high, length])| BoxRow {
            axis,
            low: format!("{:.6}", low),
            high: format!("{:.6}", high),
            length: format!("{:.6}", length),
        })
        .collect();

    output::print_separator();
    println!("{}", Table::new(&rows));
}

/// 打印质量表
fn print_masses(summary: &Summary) {
    if summary.masses.is_empty() {
        output::print_warning("No mass entries declared (atom types = 0)");
        return;
    }

    let formatted: Vec<String> = summary
        .masses
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}: {:.4}", i + 1, m))
        .collect();
    output::print_info(&format!("Masses by type: {}", formatted.join(", ")));
}

/// 打印各数据表状态，可选预览前 N 行
fn print_sections(summary: &Summary, preview: usize) {
    output::print_separator();

    print_float_section("Atoms", summary.atom_data.as_deref(), preview);
    print_int_section("Bonds", summary.bond_data.as_deref(), preview);
    print_int_section("Angles", summary.angle_data.as_deref(), preview);
    print_float_section("Velocities", summary.velocities.as_deref(), preview);
}

fn print_float_section(label: &str, table: Option<&[Vec<f64>]>, preview: usize) {
    match table {
        Some(rows) => {
            output::print_success(&format!("{}: {} rows", label, rows.len()));
            for row in rows.iter().take(preview) {
                let line: Vec<String> = row.iter().map(|v| format!("{:.6}", v)).collect();
                println!("    {}", line.join(" "));
            }
        }
        None => output::print_skip(&format!("{}: absent", label)),
    }
}

fn print_int_section(label: &str, table: Option<&[Vec<i64>]>, preview: usize) {
    match table {
        Some(rows) => {
            output::print_success(&format!("{}: {} rows", label, rows.len()));
            for row in rows.iter().take(preview) {
                let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("    {}", line.join(" "));
            }
        }
        None => output::print_skip(&format!("{}: absent", label)),
    }
}
