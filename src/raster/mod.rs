//! 最小生成树栅格化
//!
//! 把连续的欧氏坐标映射到固定分辨率的离散栅格：
//! - 边: 按边长占边界框对角线的比例插值，标记为 `edge`
//! - 顶点: 边的两个端点，标记为 `vertex`
//! - 起始顶点: 中心及上下左右四个邻居，标记为 `startvertex`
//!
//! 同时生成坐标轴刻度、MST 总长度与状态文本，交给展示层使用。

mod grid;
mod rasterizer;

pub use grid::{CellKind, RasterGrid};
pub use rasterizer::{axis_labels, rasterize, RasterPlot, DEFAULT_STATUS};
