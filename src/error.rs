use thiserror::Error;

/// 最小生成树计算与栅格化过程中的错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// 求解器收到空点集
    #[error("empty input: at least one vertex is required")]
    EmptyInput,

    /// 边界框不满足 xmin < xmax 且 ymin < ymax
    #[error("invalid bounds: ({xmin}, {ymin}) .. ({xmax}, {ymax})")]
    InvalidBounds {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    /// 对空队列执行 pop（内部不变量被破坏）
    #[error("priority queue underflow")]
    QueueUnderflow,

    /// 对已在队列中的顶点再次 push（内部不变量被破坏）
    #[error("vertex {vertex} is already in the priority queue")]
    DuplicateQueueInsert { vertex: usize },

    /// 起始顶点下标越界
    #[error("start vertex {start} out of range for {vertices} vertices")]
    StartOutOfRange { start: usize, vertices: usize },

    /// 顶点数超出上限
    #[error("{requested} vertices requested, at most {max} supported")]
    TooManyVertices { requested: usize, max: usize },

    /// 栅格分辨率过小或过大
    #[error(
        "invalid grid resolution {rows}x{columns}: each side must be in 2..={}",
        crate::config::MAX_RESOLUTION
    )]
    InvalidResolution { rows: usize, columns: usize },

    /// 顶点落在边界框之外，无法投影到栅格
    #[error("vertex {index} lies outside the bounding box")]
    PointOutOfBounds { index: usize },

    /// 非起始顶点没有父边（图不连通）
    #[error("vertex {vertex} has no edge in the spanning tree")]
    MissingEdge { vertex: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
