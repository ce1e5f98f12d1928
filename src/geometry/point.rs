//! 平面点与边界框

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 欧氏平面上的点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 两点间的欧氏距离
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// 线性插值，`t = 0` 返回 `self`，`t = 1` 返回 `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// 欧氏图的边界框
///
/// 不变量：`xmin < xmax` 且 `ymin < ymax`。通过 [`BoundingBox::new`]
/// 构造时会校验；直接构造字面量的调用方需自行保证，
/// 使用前可调用 [`BoundingBox::validate`]。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 100.0,
            ymax: 100.0,
        }
    }
}

impl BoundingBox {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        let bounds = Self {
            xmin,
            ymin,
            xmax,
            ymax,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// 检查 `xmin < xmax` 且 `ymin < ymax`（NaN 视为无效）
    pub fn validate(&self) -> Result<()> {
        if self.xmin < self.xmax && self.ymin < self.ymax {
            Ok(())
        } else {
            Err(Error::InvalidBounds {
                xmin: self.xmin,
                ymin: self.ymin,
                xmax: self.xmax,
                ymax: self.ymax,
            })
        }
    }

    /// 交换反向的坐标轴，使 min 不大于 max
    pub fn normalized(self) -> Self {
        Self {
            xmin: self.xmin.min(self.xmax),
            xmax: self.xmin.max(self.xmax),
            ymin: self.ymin.min(self.ymax),
            ymax: self.ymin.max(self.ymax),
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// 从 (xmin, ymin) 到 (xmax, ymax) 的对角线长度
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }

    /// 包含所有点的最小边界框
    ///
    /// 某一轴没有跨度时向两侧各扩展 1.0，保证结果有效。
    /// 点集为空时返回 `None`。
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            xmin: first.x,
            ymin: first.y,
            xmax: first.x,
            ymax: first.y,
        };
        for p in &points[1..] {
            bounds.xmin = bounds.xmin.min(p.x);
            bounds.ymin = bounds.ymin.min(p.y);
            bounds.xmax = bounds.xmax.max(p.x);
            bounds.ymax = bounds.ymax.max(p.y);
        }
        if bounds.xmin >= bounds.xmax {
            bounds.xmin -= 1.0;
            bounds.xmax += 1.0;
        }
        if bounds.ymin >= bounds.ymax {
            bounds.ymin -= 1.0;
            bounds.ymax += 1.0;
        }
        Some(bounds)
    }
}
