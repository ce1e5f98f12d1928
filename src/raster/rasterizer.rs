use super::grid::{CellKind, RasterGrid};
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::graph::Mst;

/// 未提供状态信息时显示的提示
pub const DEFAULT_STATUS: &str = "Check new start vertex for another MST using the same vertices";

/// 栅格化结果及汇总文本
#[derive(Debug, Clone, PartialEq)]
pub struct RasterPlot {
    pub grid: RasterGrid,
    /// xmin..=xmax 等距刻度
    pub x_labels: Vec<String>,
    /// ymin..=ymax 等距刻度
    pub y_labels: Vec<String>,
    /// MST 总长度
    pub total_distance: f64,
    pub distance_text: String,
    pub status_text: String,
    pub vertex_count: String,
    pub start_location: String,
    pub xmin: String,
    pub xmax: String,
    pub ymin: String,
    pub ymax: String,
}

/// 欧氏坐标到栅格行列的投影
///
/// 行方向翻转：ymax 对应第 0 行。
#[derive(Debug, Clone, Copy)]
struct Projector {
    bounds: BoundingBox,
    xscale: f64,
    yscale: f64,
    rows: usize,
    columns: usize,
}

impl Projector {
    fn new(bounds: BoundingBox, rows: usize, columns: usize) -> Self {
        Self {
            bounds,
            xscale: (columns - 1) as f64 / bounds.width(),
            yscale: (rows - 1) as f64 / bounds.height(),
            rows,
            columns,
        }
    }

    /// 调用方需保证 `point` 在边界框内；浮点误差被截断到栅格范围
    fn cell(&self, point: Point) -> (usize, usize) {
        let row = ((self.bounds.ymax - point.y) * self.yscale).round().max(0.0) as usize;
        let col = ((point.x - self.bounds.xmin) * self.xscale).round().max(0.0) as usize;
        (row.min(self.rows - 1), col.min(self.columns - 1))
    }
}

/// 将最小生成树绘制到栅格
///
/// 每条边按顶点下标顺序处理：先按插值点标记 `Edge`，再把两个
/// 端点标记为 `Vertex`；所有边画完后，起始顶点及其上下左右四个
/// 邻居标记为 `StartVertex`。
///
/// # 错误
/// - [`Error::InvalidResolution`]: 行列数不在 `2..=`[`crate::config::MAX_RESOLUTION`] 内
/// - [`Error::InvalidBounds`]: 边界框无效
/// - [`Error::PointOutOfBounds`]: 树中的顶点不在边界框内
/// - [`Error::MissingEdge`]: 非起始顶点没有父边
///
/// 出错时不返回任何部分结果。
pub fn rasterize(
    mst: &Mst,
    points: &[Point],
    bounds: BoundingBox,
    config: &PlotConfig,
    status: &[String],
) -> Result<RasterPlot> {
    config.validate()?;
    bounds.validate()?;

    let vertex = |index: usize| -> Result<Point> {
        points
            .get(index)
            .copied()
            .filter(|p| bounds.contains(p))
            .ok_or(Error::PointOutOfBounds { index })
    };

    // 先完成全部校验，再写入栅格
    let mut segments = Vec::with_capacity(mst.vertex_count().saturating_sub(1));
    for w in 0..mst.vertex_count() {
        if w == mst.start() {
            continue;
        }
        let edge = mst.edge(w).ok_or(Error::MissingEdge { vertex: w })?;
        segments.push((vertex(edge.from)?, vertex(edge.to)?));
    }
    let start = if mst.vertex_count() > 0 {
        Some(vertex(mst.start())?)
    } else {
        None
    };

    let projector = Projector::new(bounds, config.rows, config.columns);
    let diagonal = bounds.diagonal();
    let mut grid = RasterGrid::new(config.rows, config.columns);
    let mut total_distance = 0.0;

    for (begin, end) in segments {
        let length = begin.distance(&end);
        total_distance += length;

        // 插值点数与边长占对角线的比例成正比；重合点不插值
        let steps = (config.columns as f64 * length / diagonal) as usize;
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            let (row, col) = projector.cell(begin.lerp(&end, t));
            grid.set(row, col, CellKind::Edge);
        }

        for endpoint in [begin, end] {
            let (row, col) = projector.cell(endpoint);
            grid.set(row, col, CellKind::Vertex);
        }
    }

    if let Some(start) = start {
        let (row, col) = projector.cell(start);
        grid.set(row, col, CellKind::StartVertex);
        grid.set(row + 1, col, CellKind::StartVertex);
        grid.set(row, col + 1, CellKind::StartVertex);
        if let Some(up) = row.checked_sub(1) {
            grid.set(up, col, CellKind::StartVertex);
        }
        if let Some(left) = col.checked_sub(1) {
            grid.set(row, left, CellKind::StartVertex);
        }
    }

    let status_text = if status.is_empty() {
        DEFAULT_STATUS.to_string()
    } else {
        status.join(", ")
    };

    Ok(RasterPlot {
        grid,
        x_labels: axis_labels(bounds.xmin, bounds.xmax, config.xlabels),
        y_labels: axis_labels(bounds.ymin, bounds.ymax, config.ylabels),
        total_distance,
        distance_text: format!("{:.2}", total_distance),
        status_text,
        vertex_count: points.len().to_string(),
        start_location: start
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .unwrap_or_default(),
        xmin: format!("{:.2}", bounds.xmin),
        xmax: format!("{:.2}", bounds.xmax),
        ymin: format!("{:.2}", bounds.ymin),
        ymax: format!("{:.2}", bounds.ymax),
    })
}

/// `count` 个从 `min` 到 `max`（含两端）等距的两位小数刻度
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format!("{:.2}", min)],
        _ => {
            let incr = (max - min) / (count - 1) as f64;
            (0..count)
                .map(|i| format!("{:.2}", min + incr * i as f64))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_distance_graph, solve_mst};

    fn small_config() -> PlotConfig {
        PlotConfig {
            rows: 11,
            columns: 11,
            xlabels: 3,
            ylabels: 5,
        }
    }

    fn plot(points: &[Point], bounds: BoundingBox, config: &PlotConfig) -> Result<RasterPlot> {
        let graph = build_distance_graph(points);
        let mst = solve_mst(&graph, 0)?;
        rasterize(&mst, points, bounds, config, &[])
    }

    #[test]
    fn test_unit_square_plot() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let result = plot(&points, bounds, &small_config()).unwrap();

        assert_eq!(result.total_distance, 3.0);
        assert_eq!(result.distance_text, "3.00");
        assert_eq!(result.vertex_count, "4");
        assert_eq!(result.start_location, "(0.00, 0.00)");
        assert_eq!(result.status_text, DEFAULT_STATUS);
        assert_eq!(result.x_labels, vec!["0.00", "0.50", "1.00"]);
        assert_eq!(result.y_labels, vec!["0.00", "0.25", "0.50", "0.75", "1.00"]);

        let grid = &result.grid;
        // (0,0) 在左下角，即最后一行第 0 列
        assert_eq!(grid.get(10, 0), Some(CellKind::StartVertex));
        assert_eq!(grid.get(9, 0), Some(CellKind::StartVertex));
        assert_eq!(grid.get(10, 1), Some(CellKind::StartVertex));
        // 其它三个角是普通顶点
        assert_eq!(grid.get(0, 0), Some(CellKind::Vertex));
        assert_eq!(grid.get(10, 10), Some(CellKind::Vertex));
        assert_eq!(grid.get(0, 10), Some(CellKind::Vertex));
        assert_eq!(grid.count(CellKind::StartVertex), 3);
        assert!(grid.count(CellKind::Edge) > 0);
    }

    #[test]
    fn test_start_vertex_neighbours_inside_grid() {
        let points = vec![Point::new(5.0, 5.0), Point::new(9.0, 9.0)];
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let result = plot(&points, bounds, &small_config()).unwrap();
        let grid = &result.grid;

        for (row, col) in [(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)] {
            assert_eq!(grid.get(row, col), Some(CellKind::StartVertex));
        }
        assert_eq!(grid.count(CellKind::StartVertex), 5);
        assert_eq!(grid.get(1, 9), Some(CellKind::Vertex));
    }

    #[test]
    fn test_coincident_points_do_not_divide_by_zero() {
        let points = vec![Point::new(2.0, 3.0), Point::new(2.0, 3.0)];
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let result = plot(&points, bounds, &small_config()).unwrap();
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.distance_text, "0.00");
        assert_eq!(result.grid.count(CellKind::Edge), 0);
    }

    #[test]
    fn test_single_point() {
        let points = vec![Point::new(1.0, 1.0)];
        let bounds = BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
        let result = plot(&points, bounds, &small_config()).unwrap();
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.grid.count(CellKind::StartVertex), 5);
        assert_eq!(result.grid.count(CellKind::Vertex), 0);
    }

    #[test]
    fn test_status_messages_are_joined() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let graph = build_distance_graph(&points);
        let mst = solve_mst(&graph, 0).unwrap();
        let status = vec!["first".to_string(), "second".to_string()];
        let result = rasterize(&mst, &points, bounds, &small_config(), &status).unwrap();
        assert_eq!(result.status_text, "first, second");
    }

    #[test]
    fn test_rejects_invalid_input() {
        let points = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let graph = build_distance_graph(&points);
        let mst = solve_mst(&graph, 0).unwrap();

        let flat = BoundingBox {
            xmin: 0.0,
            ymin: 1.0,
            xmax: 10.0,
            ymax: 1.0,
        };
        assert!(matches!(
            rasterize(&mst, &points, flat, &small_config(), &[]),
            Err(Error::InvalidBounds { .. })
        ));

        let small = BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
        assert_eq!(
            rasterize(&mst, &points, small, &small_config(), &[]),
            Err(Error::PointOutOfBounds { index: 1 })
        );

        let tiny = PlotConfig {
            columns: 1,
            ..small_config()
        };
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(matches!(
            rasterize(&mst, &points, bounds, &tiny, &[]),
            Err(Error::InvalidResolution { .. })
        ));
    }

    #[test]
    fn test_oversized_grid_is_rejected_before_allocation() {
        let points = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let graph = build_distance_graph(&points);
        let mst = solve_mst(&graph, 0).unwrap();
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();

        let huge = PlotConfig {
            rows: 1 << 33,
            columns: 1 << 33,
            ..small_config()
        };
        assert_eq!(
            rasterize(&mst, &points, bounds, &huge, &[]),
            Err(Error::InvalidResolution {
                rows: 1 << 33,
                columns: 1 << 33
            })
        );
    }

    #[test]
    fn test_disconnected_tree_is_rejected() {
        let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let graph = build_distance_graph(&points);
        let mst = solve_mst(&graph, 0).unwrap();
        let bounds = BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
        assert_eq!(
            rasterize(&mst, &points, bounds, &small_config(), &[]),
            Err(Error::MissingEdge { vertex: 1 })
        );
    }

    #[test]
    fn test_axis_labels() {
        assert!(axis_labels(0.0, 1.0, 0).is_empty());
        assert_eq!(axis_labels(-2.0, 2.0, 1), vec!["-2.00"]);
        assert_eq!(axis_labels(-1.0, 1.0, 3), vec!["-1.00", "0.00", "1.00"]);
        assert_eq!(axis_labels(0.0, 100.0, 11).len(), 11);
        assert_eq!(axis_labels(0.0, 100.0, 11)[10], "100.00");
    }
}
