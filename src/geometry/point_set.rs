use rand::Rng;

use super::point::{BoundingBox, Point};
use crate::error::{Error, Result};

/// 有序点集及其边界框
///
/// 顶点以下标标识，下标 0 始终是最小生成树的起始顶点。
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    bounds: BoundingBox,
}

impl PointSet {
    /// 使用给定的点与边界框构建点集
    ///
    /// 只校验边界框本身；点是否落在框内由栅格化阶段检查。
    pub fn new(points: Vec<Point>, bounds: BoundingBox) -> Result<Self> {
        bounds.validate()?;
        Ok(Self { points, bounds })
    }

    /// 以点集的最小外接框作为边界
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let bounds = BoundingBox::enclosing(&points).ok_or(Error::EmptyInput)?;
        Ok(Self { points, bounds })
    }

    /// 在边界框内均匀随机生成 `count` 个点
    pub fn random<R: Rng + ?Sized>(count: usize, bounds: BoundingBox, rng: &mut R) -> Result<Self> {
        bounds.validate()?;
        let points = (0..count)
            .map(|_| {
                let x = bounds.xmin + bounds.width() * rng.random::<f64>();
                let y = bounds.ymin + bounds.height() * rng.random::<f64>();
                Point::new(x, y)
            })
            .collect();
        Ok(Self { points, bounds })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 将 `index` 处的顶点换到下标 0，使其成为新的起始顶点
    pub fn swap_start(&mut self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(Error::StartOutOfRange {
                start: index,
                vertices: self.points.len(),
            });
        }
        self.points.swap(0, index);
        Ok(())
    }

    /// 起始顶点坐标的文本形式，如 `(1.00, 2.50)`
    pub fn start_location(&self) -> Option<String> {
        self.points
            .first()
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_points_inside_bounds() {
        let bounds = BoundingBox::new(-5.0, 10.0, 5.0, 30.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let set = PointSet::random(500, bounds, &mut rng).unwrap();
        assert_eq!(set.len(), 500);
        assert!(set.points().iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let bounds = BoundingBox::default();
        let a = PointSet::random(20, bounds, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = PointSet::random(20, bounds, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_swap_start() {
        let mut set = PointSet::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.5),
        ])
        .unwrap();
        set.swap_start(2).unwrap();
        assert_eq!(set.points()[0], Point::new(2.0, 0.5));
        assert_eq!(set.points()[2], Point::new(0.0, 0.0));
        assert_eq!(set.start_location().as_deref(), Some("(2.00, 0.50)"));

        assert_eq!(
            set.swap_start(3),
            Err(Error::StartOutOfRange {
                start: 3,
                vertices: 3
            })
        );
    }

    #[test]
    fn test_from_points_rejects_empty() {
        assert_eq!(PointSet::from_points(Vec::new()), Err(Error::EmptyInput));
    }
}
