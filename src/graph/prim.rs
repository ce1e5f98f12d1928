use super::distance::DistanceGraph;
use super::queue::IndexedPriorityQueue;
use crate::error::{Error, Result};

/// 树边：`from` 是已在树中的顶点，`to` 是新加入的顶点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// 最小生成树
///
/// 以顶点下标索引父边：`edge(w)` 是把 `w` 接入树的边。
/// 起始顶点没有父边；图不连通时，不可达的顶点也没有父边。
#[derive(Debug, Clone, PartialEq)]
pub struct Mst {
    start: usize,
    parents: Vec<Option<Edge>>,
}

impl Mst {
    /// 起始顶点
    pub fn start(&self) -> usize {
        self.start
    }

    /// 图中顶点数（不论是否被树覆盖）
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// 顶点 `w` 的父边
    pub fn edge(&self, w: usize) -> Option<&Edge> {
        self.parents.get(w).and_then(Option::as_ref)
    }

    /// 按顶点下标顺序遍历所有树边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.parents.iter().flatten()
    }

    /// 树边数量
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// 所有树边权重之和
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|e| e.weight).sum()
    }

    /// 除起始顶点外，每个顶点都有父边
    pub fn is_spanning(&self) -> bool {
        self.parents
            .iter()
            .enumerate()
            .all(|(w, edge)| w == self.start || edge.is_some())
    }

    /// 第一个缺少父边的非起始顶点
    pub fn first_unreached(&self) -> Option<usize> {
        self.parents
            .iter()
            .enumerate()
            .find(|(w, edge)| *w != self.start && edge.is_none())
            .map(|(w, _)| w)
    }
}

/// 使用 Prim 算法求最小生成树
///
/// 起始顶点以距离 0 入队，因此总是第一个被弹出；每次弹出的
/// 顶点即为新加入树的顶点，随后对其执行 visit：用它到每个
/// 未加入树的顶点 `w` 的距离尝试松弛 `dist_to[w]`。
///
/// # 错误
/// - [`Error::EmptyInput`]: 图为空
/// - [`Error::StartOutOfRange`]: `start >= V`
///
/// # 性能
/// - 时间: O(V² log V)（稠密图，每次松弛 O(log V)）
/// - 空间: O(V)
pub fn solve_mst(graph: &DistanceGraph, start: usize) -> Result<Mst> {
    let vertices = graph.vertex_count();
    if vertices == 0 {
        return Err(Error::EmptyInput);
    }
    if start >= vertices {
        return Err(Error::StartOutOfRange { start, vertices });
    }

    let mut parents: Vec<Option<Edge>> = vec![None; vertices];
    let mut marked = vec![false; vertices];
    let mut dist_to = vec![f64::INFINITY; vertices];
    let mut queue = IndexedPriorityQueue::with_capacity(vertices);

    dist_to[start] = 0.0;
    queue.push(start, 0.0)?;

    while !queue.is_empty() {
        let v = queue.pop_min()?.vertex;
        marked[v] = true;

        for (w, &distance) in graph.row(v).iter().enumerate() {
            if marked[w] {
                continue;
            }
            if distance < dist_to[w] {
                // v 到 w 是目前树到 w 的最佳连接
                parents[w] = Some(Edge {
                    from: v,
                    to: w,
                    weight: distance,
                });
                dist_to[w] = distance;
                queue.decrease_or_insert(w, distance);
            }
        }
    }

    Ok(Mst { start, parents })
}
