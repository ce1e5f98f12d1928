//! 欧氏最小生成树
//!
//! # 架构概览
//!
//! ```text
//! 输入点集 (&[Point])
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ build_distance_graph │  ── O(V²) 稠密距离矩阵
//! └──────────┬───────────┘
//!            │
//!            ▼
//!      DistanceGraph
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │     solve_mst()      │  ── Prim 算法 + IndexedPriorityQueue
//! └──────────┬───────────┘
//!            │
//!            ▼
//!           Mst
//! ```
//!
//! # 使用示例
//!
//! ```
//! use primmst::geometry::Point;
//! use primmst::graph::{build_distance_graph, solve_mst};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//! ];
//! let graph = build_distance_graph(&points);
//! let mst = solve_mst(&graph, 0).unwrap();
//! assert_eq!(mst.edge_count(), 3);
//! assert_eq!(mst.total_weight(), 3.0);
//! ```

mod distance;
mod prim;
mod queue;


pub use distance::{build_distance_graph, DistanceGraph, SELF_DISTANCE};
pub use prim::{solve_mst, Edge, Mst};
pub use queue::{IndexedPriorityQueue, QueueItem};
