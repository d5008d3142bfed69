//! # Restart 文件数据模型
//!
//! 定义解析结果的类型化表示：header 计数、盒子尺寸、质量表
//! 与四个可选数据表（Atoms / Bonds / Angles / Velocities）。
//!
//! 文档构造后不再变更；需要新数据时重新解析生成新文档。
//! `Option` 区分“段不存在”（None）与“段存在但零行”（Some(空表)）。
//!
//! ## 依赖关系
//! - 被 `parsers/restart.rs` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 模拟盒子尺寸
///
/// 3x3 矩阵，行依次为 x, y, z 轴，列为 [low, high, length]。
/// length 始终由 high - low 导出，不从文件读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// [[xlo, xhi, lx], [ylo, yhi, ly], [zlo, zhi, lz]]
    pub matrix: [[f64; 3]; 3],
}

impl BoxDimensions {
    /// 从各轴 (low, high) 边界构造，第三列取 high - low
    pub fn from_bounds(bounds: [[f64; 2]; 3]) -> Self {
        let mut matrix = [[0.0; 3]; 3];
        for (axis, [low, high]) in bounds.into_iter().enumerate() {
            matrix[axis] = [low, high, high - low];
        }
        BoxDimensions { matrix }
    }

    /// 各轴长度 [lx, ly, lz]
    pub fn lengths(&self) -> [f64; 3] {
        [self.matrix[0][2], self.matrix[1][2], self.matrix[2][2]]
    }
}

/// Header 计数与盒子尺寸
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// 原子数
    pub atom_count: usize,

    /// 原子类型数
    pub atom_type_count: usize,

    /// 键数
    pub bond_count: usize,

    /// 键类型数
    pub bond_type_count: usize,

    /// 键角数
    pub angle_count: usize,

    /// 键角类型数
    pub angle_type_count: usize,

    /// 盒子尺寸
    pub box_dimensions: BoxDimensions,
}

/// 解析完成的 restart 文档
///
/// 质量表长度等于 atom_type_count；Atoms/Velocities 行数等于
/// atom_count，Bonds 等于 bond_count，Angles 等于 angle_count。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartDocument {
    /// Header 计数与盒子尺寸
    pub header: Header,

    /// 质量表，按原子类型顺序（文件内 1 起始，内存内 0 起始）
    pub masses: Vec<f64>,

    /// Atoms 数据表（段缺失时为 None）
    pub atoms: Option<Vec<Vec<f64>>>,

    /// Bonds 数据表（段缺失时为 None）
    pub bonds: Option<Vec<Vec<i64>>>,

    /// Angles 数据表（段缺失时为 None）
    pub angles: Option<Vec<Vec<i64>>>,

    /// Velocities 数据表（段缺失时为 None）
    pub velocities: Option<Vec<Vec<f64>>>,
}

impl RestartDocument {
    /// 生成摘要视图
    pub fn summary(&self) -> Summary {
        Summary {
            atom_count: self.header.atom_count,
            atom_type_count: self.header.atom_type_count,
            bond_count: self.header.bond_count,
            bond_type_count: self.header.bond_type_count,
            angle_count: self.header.angle_count,
            angle_type_count: self.header.angle_type_count,
            box_dimensions: self.header.box_dimensions.matrix,
            masses: self.masses.clone(),
            atom_data: self.atoms.clone(),
            bond_data: self.bonds.clone(),
            angle_data: self.angles.clone(),
            velocities: self.velocities.clone(),
        }
    }
}

/// 摘要视图
///
/// 序列化键名沿用 LAMMPS 社区脚本的习惯拼写；缺失的段序列化为 null。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Atoms")]
    pub atom_count: usize,

    #[serde(rename = "Atom Types")]
    pub atom_type_count: usize,

    #[serde(rename = "Bonds")]
    pub bond_count: usize,

    #[serde(rename = "Bond Types")]
    pub bond_type_count: usize,

    #[serde(rename = "Angles")]
    pub angle_count: usize,

    #[serde(rename = "Angle Types")]
    pub angle_type_count: usize,

    #[serde(rename = "Box Dimensions")]
    pub box_dimensions: [[f64; 3]; 3],

    #[serde(rename = "Masses")]
    pub masses: Vec<f64>,

    #[serde(rename = "Atom Data")]
    pub atom_data: Option<Vec<Vec<f64>>>,

    #[serde(rename = "Bond Data")]
    pub bond_data: Option<Vec<Vec<i64>>>,

    #[serde(rename = "Angle Data")]
    pub angle_data: Option<Vec<Vec<i64>>>,

    #[serde(rename = "Velocities")]
    pub velocities: Option<Vec<Vec<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Header {
        Header {
            atom_count: 4,
            atom_type_count: 2,
            bond_count: 0,
            bond_type_count: 0,
            angle_count: 0,
            angle_type_count: 0,
            box_dimensions: BoxDimensions::from_bounds([
                [0.0, 10.0],
                [-5.0, 5.0],
                [1.5, 4.0],
            ]),
        }
    }

    #[test]
    fn test_box_dimensions_length_derived() {
        let boxdim = BoxDimensions::from_bounds([[0.0, 10.0], [-5.0, 5.0], [1.5, 4.0]]);

        assert!((boxdim.matrix[0][2] - 10.0).abs() < 1e-12);
        assert!((boxdim.matrix[1][2] - 10.0).abs() < 1e-12);
        assert!((boxdim.matrix[2][2] - 2.5).abs() < 1e-12);

        // length == high - low on every axis
        for row in &boxdim.matrix {
            assert!((row[2] - (row[1] - row[0])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_box_dimensions_lengths() {
        let boxdim = BoxDimensions::from_bounds([[0.0, 3.0], [0.0, 4.0], [0.0, 5.0]]);
        assert_eq!(boxdim.lengths(), [3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_summary_copies_counts_and_absence() {
        let doc = RestartDocument {
            header: sample_header(),
            masses: vec![12.0, 16.0],
            atoms: Some(vec![vec![1.0, 1.0, 0.0, 0.0, 0.0]]),
            bonds: None,
            angles: None,
            velocities: None,
        };

        let summary = doc.summary();
        assert_eq!(summary.atom_count, 4);
        assert_eq!(summary.atom_type_count, 2);
        assert_eq!(summary.masses, vec![12.0, 16.0]);
        assert!(summary.atom_data.is_some());

        // absent sections stay absent, not empty-but-present
        assert!(summary.bond_data.is_none());
        assert!(summary.angle_data.is_none());
        assert!(summary.velocities.is_none());
    }

    #[test]
    fn test_summary_keeps_empty_present_table_distinct() {
        let doc = RestartDocument {
            header: sample_header(),
            masses: vec![],
            atoms: None,
            bonds: Some(vec![]),
            angles: None,
            velocities: None,
        };

        let summary = doc.summary();
        assert_eq!(summary.bond_data, Some(vec![]));
        assert!(summary.atom_data.is_none());
    }
}
