use std::collections::HashMap;

use egui::{Color32, ColorImage, Context, TextureHandle, TextureId};

use crate::raster::{CellKind, RasterGrid};

/// 单元格类型到颜色的映射
#[derive(Clone, Debug)]
pub struct CellPalette {
    colors: HashMap<CellKind, Color32>,
}

impl Default for CellPalette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert(CellKind::Background, Color32::WHITE);
        colors.insert(CellKind::Edge, Color32::from_rgb(160, 160, 160));
        colors.insert(CellKind::Vertex, Color32::BLACK);
        colors.insert(CellKind::StartVertex, Color32::from_rgb(0, 160, 0));
        Self { colors }
    }
}

impl CellPalette {
    pub fn color(&self, kind: CellKind) -> Color32 {
        self.colors.get(&kind).copied().unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, kind: CellKind, color: Color32) {
        self.colors.insert(kind, color);
    }
}

/// 把栅格上传为 egui 纹理
pub struct GridRenderer {
    texture: Option<TextureHandle>,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self { texture: None }
    }

    pub fn upload(&mut self, ctx: &Context, grid: &RasterGrid, palette: &CellPalette) -> TextureId {
        let image = colorize(grid, palette);
        // NEAREST 保持单元格边缘锐利
        let tex = ctx.load_texture("mst_grid", image, egui::TextureOptions::NEAREST);
        let id = tex.id();
        self.texture = Some(tex);
        id
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture.as_ref().map(|t| t.id())
    }

    pub fn clear(&mut self) {
        self.texture = None;
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn colorize(grid: &RasterGrid, palette: &CellPalette) -> ColorImage {
    let pixels = grid
        .cells()
        .iter()
        .map(|&cell| palette.color(cell))
        .collect();
    ColorImage {
        size: [grid.columns(), grid.rows()],
        pixels,
    }
}
