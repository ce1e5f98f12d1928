use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::BoundingBox;

/// 顶点数上限，限制 O(V²) 的距离矩阵与栅格化开销
pub const MAX_VERTICES: usize = 2000;

/// 栅格每边的单元格上限
pub const MAX_RESOLUTION: usize = 4096;

pub const DEFAULT_ROWS: usize = 300;
pub const DEFAULT_LABELS: usize = 11;

/// 栅格分辨率与坐标轴刻度数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub rows: usize,
    pub columns: usize,
    pub xlabels: usize,
    pub ylabels: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_ROWS,
            xlabels: DEFAULT_LABELS,
            ylabels: DEFAULT_LABELS,
        }
    }
}

impl PlotConfig {
    /// 行列数都在 `2..=MAX_RESOLUTION` 内
    ///
    /// 至少为 2，缩放系数 `(n - 1) / span` 才有意义。
    pub fn validate(&self) -> Result<()> {
        let valid = 2..=MAX_RESOLUTION;
        if !valid.contains(&self.rows) || !valid.contains(&self.columns) {
            return Err(Error::InvalidResolution {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

/// 随机欧氏图的生成参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub vertices: usize,
    pub bounds: BoundingBox,
    pub seed: u64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            vertices: 100,
            bounds: BoundingBox::default(),
            seed: 1,
        }
    }
}

impl GraphOptions {
    /// 交换反向输入的边界（如 xmin > xmax）
    ///
    /// 相等的边界无法修正，仍由 [`BoundingBox::validate`] 报错。
    pub fn normalized(mut self) -> Self {
        self.bounds = self.bounds.normalized();
        self
    }

    pub fn validate(&self, max_vertices: usize) -> Result<()> {
        if self.vertices > max_vertices {
            return Err(Error::TooManyVertices {
                requested: self.vertices,
                max: max_vertices,
            });
        }
        self.bounds.validate()
    }
}
