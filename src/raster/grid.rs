use serde::{Deserialize, Serialize};

/// 栅格单元类型
///
/// 标签字符串与展示层的 CSS 类名一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Background,
    Edge,
    Vertex,
    StartVertex,
}

impl CellKind {
    pub const ALL: [CellKind; 4] = [
        CellKind::Background,
        CellKind::Edge,
        CellKind::Vertex,
        CellKind::StartVertex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CellKind::Background => "",
            CellKind::Edge => "edge",
            CellKind::Vertex => "vertex",
            CellKind::StartVertex => "startvertex",
        }
    }
}

/// 固定尺寸的二维栅格
///
/// cells[row * columns + col]，第 0 行对应 ymax。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGrid {
    rows: usize,
    columns: usize,
    cells: Vec<CellKind>,
}

impl RasterGrid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![CellKind::Background; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellKind> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// 写入单元格；越界时不写入并返回 `false`
    pub fn set(&mut self, row: usize, col: usize, kind: CellKind) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// 行优先的全部单元格
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// 行优先的单元格标签
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|cell| cell.label())
    }

    /// 第 `row` 行
    pub fn row(&self, row: usize) -> Option<&[CellKind]> {
        (row < self.rows).then(|| &self.cells[row * self.columns..(row + 1) * self.columns])
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }
}
