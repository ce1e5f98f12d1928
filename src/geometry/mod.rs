//! 几何基础类型
//!
//! - [`Point`][]: 平面坐标点
//! - [`BoundingBox`][]: 欧氏图的边界，用于栅格化时的坐标缩放
//! - [`PointSet`][]: 有序点集，下标 0 为起始顶点

mod point;
mod point_set;

pub use point::{BoundingBox, Point};
pub use point_set::PointSet;
