//! 单次绘制请求的完整流程：生成点集 → 距离矩阵 → Prim → 栅格化
//!
//! 每个 [`MstSession`] 独立持有自己的点集与生成树，不共享可变状态。

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{GraphOptions, PlotConfig};
use crate::error::Result;
use crate::geometry::PointSet;
use crate::graph::{build_distance_graph, solve_mst, Mst};
use crate::raster::{rasterize, RasterPlot};

#[derive(Debug, Clone)]
pub struct MstSession {
    points: PointSet,
    mst: Option<Mst>,
}

impl MstSession {
    /// 按参数在边界框内随机生成顶点；反向的边界会先被交换
    pub fn generate(options: &GraphOptions, max_vertices: usize) -> Result<Self> {
        let options = options.clone().normalized();
        options.validate(max_vertices)?;

        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
        let points = PointSet::random(options.vertices, options.bounds, &mut rng)?;
        log::debug!(
            "generated {} vertices in {:?} (seed {})",
            points.len(),
            options.bounds,
            options.seed
        );
        Ok(Self::from_points(points))
    }

    pub fn from_points(points: PointSet) -> Self {
        Self { points, mst: None }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn mst(&self) -> Option<&Mst> {
        self.mst.as_ref()
    }

    /// 随机选择一个顶点换到下标 0 作为新的起始顶点，并清除旧的生成树
    ///
    /// 返回被选中顶点原来的下标。
    pub fn reseat_start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let index = if self.points.is_empty() {
            0
        } else {
            rng.random_range(0..self.points.len())
        };
        self.points.swap_start(index)?;
        self.mst = None;
        log::debug!("start vertex moved from index {index}");
        Ok(index)
    }

    /// 构建距离矩阵并求最小生成树
    pub fn solve(&mut self) -> Result<&Mst> {
        let mst = compute_mst(&self.points)?;
        Ok(&*self.mst.insert(mst))
    }

    /// 栅格化当前生成树；尚未求解时先求解
    pub fn render(&mut self, config: &PlotConfig, status: &[String]) -> Result<RasterPlot> {
        let mst = match self.mst.take() {
            Some(mst) => mst,
            None => compute_mst(&self.points)?,
        };
        let plot = rasterize(
            &mst,
            self.points.points(),
            self.points.bounds(),
            config,
            status,
        );
        self.mst = Some(mst);
        plot
    }
}

fn compute_mst(points: &PointSet) -> Result<Mst> {
    let start_time = Instant::now();
    let graph = build_distance_graph(points.points());
    let mst = solve_mst(&graph, 0)?;
    log::debug!(
        "MST over {} vertices: {} edges, weight {:.2}, took {:.2?}",
        graph.vertex_count(),
        mst.edge_count(),
        mst.total_weight(),
        start_time.elapsed()
    );
    Ok(mst)
}

/// 运行完整流程：随机生成 → 求解 → 栅格化
///
/// 任一阶段出错都直接返回，由调用方转换为展示用的状态信息。
pub fn run(options: &GraphOptions, config: &PlotConfig, max_vertices: usize) -> Result<RasterPlot> {
    let mut session = MstSession::generate(options, max_vertices)?;
    let plot = session.render(config, &[])?;
    log::info!(
        "plotted MST: {} vertices, total distance {}",
        plot.vertex_count,
        plot.distance_text
    );
    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_VERTICES;
    use crate::error::Error;
    use crate::geometry::BoundingBox;
    use crate::raster::CellKind;

    #[test]
    fn test_generate_and_render() {
        let options = GraphOptions {
            vertices: 40,
            bounds: BoundingBox::new(-10.0, -10.0, 10.0, 10.0).unwrap(),
            seed: 3,
        };
        let mut session = MstSession::generate(&options, MAX_VERTICES).unwrap();
        let config = PlotConfig::default();
        let plot = session.render(&config, &[]).unwrap();

        assert_eq!(plot.vertex_count, "40");
        assert_eq!(session.mst().map(|m| m.edge_count()), Some(39));
        assert!(plot.total_distance > 0.0);
        assert_eq!(plot.grid.rows(), config.rows);
        assert!(plot.grid.count(CellKind::StartVertex) >= 3);
    }

    #[test]
    fn test_same_seed_same_plot() {
        let options = GraphOptions::default();
        let config = PlotConfig::default();
        let a = run(&options, &config, MAX_VERTICES).unwrap();
        let b = run(&options, &config, MAX_VERTICES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let options = GraphOptions {
            vertices: 10,
            bounds: BoundingBox {
                xmin: 10.0,
                ymin: 10.0,
                xmax: 0.0,
                ymax: 0.0,
            },
            seed: 9,
        };
        let session = MstSession::generate(&options, MAX_VERTICES).unwrap();
        assert_eq!(
            session.points().bounds(),
            BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap()
        );
    }

    #[test]
    fn test_too_many_vertices() {
        let options = GraphOptions {
            vertices: 11,
            ..GraphOptions::default()
        };
        assert!(matches!(
            MstSession::generate(&options, 10),
            Err(Error::TooManyVertices {
                requested: 11,
                max: 10
            })
        ));
    }

    #[test]
    fn test_reseat_start_keeps_total_distance() {
        let options = GraphOptions {
            vertices: 25,
            ..GraphOptions::default()
        };
        let config = PlotConfig::default();
        let mut session = MstSession::generate(&options, MAX_VERTICES).unwrap();
        let before = session.render(&config, &[]).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let moved = session.reseat_start(&mut rng).unwrap();
        assert!(moved < 25);
        assert!(session.mst().is_none());

        let after = session.render(&config, &[]).unwrap();
        assert!((before.total_distance - after.total_distance).abs() < 1e-9);
    }

    #[test]
    fn test_empty_session_fails_to_solve() {
        let options = GraphOptions {
            vertices: 0,
            ..GraphOptions::default()
        };
        let mut session = MstSession::generate(&options, MAX_VERTICES).unwrap();
        assert_eq!(session.solve().err(), Some(Error::EmptyInput));
    }
}
