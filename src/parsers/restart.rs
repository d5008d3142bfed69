//! # LAMMPS restart/data 格式解析器
//!
//! 解析 LAMMPS data/restart 文本文件：分词、段索引、固定行号
//! header 解读、按计数切片的数据表提取。
//!
//! ## 格式说明
//! ```text
//! LAMMPS data file            # row 0: 标题行
//! 100 atoms                   # row 1: 原子数
//! 2 atom types                # row 2: 原子类型数
//! 99 bonds                    # row 3: 键数
//! 1 bond types                # row 4: 键类型数
//! 98 angles                   # row 5: 键角数
//! 1 angle types               # row 6: 键角类型数
//! 0.0 25.0 xlo xhi            # rows 7-9: 各轴边界
//! 0.0 25.0 ylo yhi
//! 0.0 25.0 zlo zhi
//! Masses                      # row 10: 质量段标题
//! 1 12.011                    # rows 11..11+atom_types: 质量
//! 2 15.999
//! Atoms                       # 带标签的段，数据行紧随其后
//! ...
//! ```
//! 行号均指去除空行后的 token 行序号。header 与质量段按固定行号
//! 读取（格式契约），Atoms/Velocities/Bonds/Angles 等段按标签定位。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/restart.rs`

use crate::error::{LmpreadError, Result};
use crate::models::{BoxDimensions, Header, RestartDocument};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// 可识别的段标签
const SECTION_LABELS: [&str; 6] = [
    "Atoms",
    "Velocities",
    "Bonds",
    "Angles",
    "Dihedrals",
    "Impropers",
];

/// 质量段数据的固定起始行号（row 10 为 "Masses" 标题行）
const MASSES_START: usize = 11;

/// 解析 restart/data 文件
pub fn parse_restart_file(path: &Path) -> Result<RestartDocument> {
    let content = fs::read_to_string(path).map_err(|e| LmpreadError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_restart_content(&content)
}

/// 从字符串内容解析 restart/data 格式
pub fn parse_restart_content(content: &str) -> Result<RestartDocument> {
    let rows = tokenize(content);
    let sections = identify_sections(&rows);
    let header = parse_header(&rows)?;
    let masses = parse_masses(&rows, header.atom_type_count)?;

    // Atoms/Velocities 行数由 atom_count 决定，Bonds/Angles 由各自计数决定
    let atoms = extract_table::<f64>(&rows, &sections, "Atoms", header.atom_count)?;
    let velocities = extract_table::<f64>(&rows, &sections, "Velocities", header.atom_count)?;
    let bonds = extract_table::<i64>(&rows, &sections, "Bonds", header.bond_count)?;
    let angles = extract_table::<i64>(&rows, &sections, "Angles", header.angle_count)?;

    Ok(RestartDocument {
        header,
        masses,
        atoms,
        bonds,
        angles,
        velocities,
    })
}

/// 分词：每个非空行产生一个 token 行，按空白切分
///
/// 空行在此处被丢弃；后续所有行号都基于过滤后的序列。
fn tokenize(content: &str) -> Vec<Vec<&str>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect()
}

/// 段索引：记录每个可识别标签对应的数据起始行号
///
/// 标签重复出现时保留最后一次（单遍扫描覆盖写入）。
fn identify_sections<'a>(rows: &[Vec<&'a str>]) -> HashMap<&'a str, usize> {
    let mut sections = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        if let Some(&first) = row.first() {
            if SECTION_LABELS.contains(&first) {
                sections.insert(first, i + 1);
            }
        }
    }
    sections
}

/// 解析 header：固定行号的计数 + 盒子边界
fn parse_header(rows: &[Vec<&str>]) -> Result<Header> {
    Ok(Header {
        atom_count: parse_count(rows, 1, true)?,
        atom_type_count: parse_count(rows, 2, true)?,
        bond_count: parse_count(rows, 3, false)?,
        bond_type_count: parse_count(rows, 4, false)?,
        angle_count: parse_count(rows, 5, false)?,
        angle_type_count: parse_count(rows, 6, false)?,
        box_dimensions: parse_box(rows)?,
    })
}

/// 读取单个计数行的首 token
///
/// 非必需行缺失时取 0（文件过短时 bond/angle 计数的约定默认值）。
fn parse_count(rows: &[Vec<&str>], index: usize, required: bool) -> Result<usize> {
    match rows.get(index) {
        Some(row) => row[0].parse().map_err(|_| LmpreadError::MalformedHeader {
            reason: format!("non-numeric count '{}' in row {}", row[0], index),
        }),
        None if required => Err(LmpreadError::MalformedHeader {
            reason: format!("missing count row {}", index),
        }),
        None => Ok(0),
    }
}

/// 解析盒子边界（行 7~9，每行前两个 token 为 low/high）
fn parse_box(rows: &[Vec<&str>]) -> Result<BoxDimensions> {
    let mut bounds = [[0.0f64; 2]; 3];

    for (axis, bound) in bounds.iter_mut().enumerate() {
        let index = 7 + axis;
        let row = rows.get(index).ok_or_else(|| LmpreadError::MalformedHeader {
            reason: format!("missing box bounds row {}", index),
        })?;

        if row.len() < 2 {
            return Err(LmpreadError::MalformedHeader {
                reason: format!(
                    "box bounds row {} has {} tokens, expected at least 2",
                    index,
                    row.len()
                ),
            });
        }

        for (k, slot) in bound.iter_mut().enumerate() {
            *slot = row[k].parse().map_err(|_| LmpreadError::MalformedHeader {
                reason: format!("non-numeric box bound '{}' in row {}", row[k], index),
            })?;
        }
    }

    Ok(BoxDimensions::from_bounds(bounds))
}

/// 解析质量表：固定行号 11 起，每行第二个 token 为质量
fn parse_masses(rows: &[Vec<&str>], atom_type_count: usize) -> Result<Vec<f64>> {
    if atom_type_count == 0 {
        return Ok(Vec::new());
    }

    let end = MASSES_START + atom_type_count;
    if rows.len() < end {
        return Err(LmpreadError::TruncatedMasses {
            expected: atom_type_count,
            found: rows.len().saturating_sub(MASSES_START),
        });
    }

    let mut masses = Vec::with_capacity(atom_type_count);
    for (i, row) in rows[MASSES_START..end].iter().enumerate() {
        let token = row.get(1).ok_or_else(|| LmpreadError::RaggedRow {
            section: "Masses".to_string(),
            row: MASSES_START + i,
            expected: 2,
            found: row.len(),
        })?;
        let mass = token.parse().map_err(|_| LmpreadError::NonNumericToken {
            section: "Masses".to_string(),
            row: MASSES_START + i,
            token: token.to_string(),
        })?;
        masses.push(mass);
    }

    Ok(masses)
}

/// 按标签提取数据表
///
/// 标签缺失返回 None（非错误）。存在时从记录的偏移切出恰好
/// `count` 行，每个 token 按声明的数值类型解析，行宽须一致。
fn extract_table<T: FromStr>(
    rows: &[Vec<&str>],
    sections: &HashMap<&str, usize>,
    label: &str,
    count: usize,
) -> Result<Option<Vec<Vec<T>>>> {
    let start = match sections.get(label) {
        Some(&start) => start,
        None => return Ok(None),
    };

    let end = start + count;
    if rows.len() < end {
        return Err(LmpreadError::TruncatedSection {
            section: label.to_string(),
            expected: count,
            found: rows.len() - start,
        });
    }

    let slice = &rows[start..end];
    let width = slice.first().map(|row| row.len()).unwrap_or(0);

    let mut table = Vec::with_capacity(count);
    for (i, row) in slice.iter().enumerate() {
        if row.len() != width {
            return Err(LmpreadError::RaggedRow {
                section: label.to_string(),
                row: start + i,
                expected: width,
                found: row.len(),
            });
        }

        let mut parsed = Vec::with_capacity(width);
        for token in row {
            let value = token.parse::<T>().map_err(|_| LmpreadError::NonNumericToken {
                section: label.to_string(),
                row: start + i,
                token: token.to_string(),
            })?;
            parsed.push(value);
        }
        table.push(parsed);
    }

    Ok(Some(table))
}
