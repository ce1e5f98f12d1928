use crate::geometry::Point;

/// 对角线上的哨兵距离，大于任何真实的点间距离
pub const SELF_DISTANCE: f64 = f64::INFINITY;

/// 完全欧氏图的稠密距离矩阵
///
/// `V×V` 对称矩阵按行优先扁平化存储；构建后只读。
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGraph {
    vertices: usize,
    /// distances[i * vertices + j] = 点 i 与点 j 的距离
    distances: Vec<f64>,
}

impl DistanceGraph {
    /// 构建距离矩阵
    ///
    /// 每对无序点只计算一次，同时写入 `[i][j]` 与 `[j][i]`。
    ///
    /// # 性能
    /// - 时间: O(V²)
    /// - 空间: O(V²)
    pub fn build(points: &[Point]) -> Self {
        let vertices = points.len();
        let mut distances = vec![0.0; vertices * vertices];

        for i in 0..vertices {
            distances[i * vertices + i] = SELF_DISTANCE;
            for j in (i + 1)..vertices {
                let distance = points[i].distance(&points[j]);
                distances[i * vertices + j] = distance;
                distances[j * vertices + i] = distance;
            }
        }

        Self {
            vertices,
            distances,
        }
    }

    /// 顶点数 V
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// 顶点 `i` 与 `j` 之间的距离，`i == j` 时为 [`SELF_DISTANCE`]
    ///
    /// 任一下标越界时返回 `None`。
    pub fn distance(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.vertices && j < self.vertices {
            Some(self.distances[i * self.vertices + j])
        } else {
            None
        }
    }

    /// 顶点 `v` 到所有顶点的距离
    pub fn row(&self, v: usize) -> &[f64] {
        let start = v * self.vertices;
        &self.distances[start..start + self.vertices]
    }
}

/// 构建完全图的距离矩阵
pub fn build_distance_graph(points: &[Point]) -> DistanceGraph {
    DistanceGraph::build(points)
}
