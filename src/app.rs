use egui::{Align, Layout, TextureId};

use crate::config::{GraphOptions, PlotConfig, MAX_VERTICES};
use crate::pipeline::MstSession;
use crate::raster::RasterPlot;
use crate::rendering::{CellPalette, GridRenderer};

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PrimMstApp {
    options: GraphOptions,
    plot_config: PlotConfig,

    #[serde(skip)]
    session: Option<MstSession>,
    #[serde(skip)]
    plot: Option<RasterPlot>,
    #[serde(skip)]
    status: Vec<String>,
    #[serde(skip)]
    renderer: GridRenderer,
    #[serde(skip)]
    palette: CellPalette,
    #[serde(skip)]
    texture_dirty: bool,
}

impl Default for PrimMstApp {
    fn default() -> Self {
        Self {
            options: GraphOptions::default(),
            plot_config: PlotConfig::default(),
            session: None,
            plot: None,
            status: Vec::new(),
            renderer: GridRenderer::new(),
            palette: CellPalette::default(),
            texture_dirty: true,
        }
    }
}

impl PrimMstApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: PrimMstApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.regenerate();
        app
    }

    /// 用当前参数生成新的随机点集并绘制
    fn regenerate(&mut self) {
        self.status.clear();
        match MstSession::generate(&self.options, MAX_VERTICES) {
            Ok(session) => {
                self.session = Some(session);
                self.replot();
            }
            Err(err) => {
                log::warn!("generate vertices: {err}");
                self.status.push(err.to_string());
                self.session = None;
                self.plot = None;
                self.texture_dirty = true;
            }
        }
    }

    /// 保留顶点，随机换一个起始顶点
    fn new_start_vertex(&mut self) {
        self.status.clear();
        let Some(session) = self.session.as_mut() else {
            self.regenerate();
            return;
        };
        if let Err(err) = session.reseat_start(&mut rand::rng()) {
            log::warn!("new start vertex: {err}");
            self.status.push(err.to_string());
        }
        self.replot();
    }

    fn replot(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.render(&self.plot_config, &self.status) {
            Ok(plot) => {
                log::info!(
                    "MST distance {} over {} vertices",
                    plot.distance_text,
                    plot.vertex_count
                );
                self.plot = Some(plot);
            }
            Err(err) => {
                log::warn!("plot MST: {err}");
                self.status.push(err.to_string());
                self.plot = None;
            }
        }
        self.texture_dirty = true;
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) -> Option<TextureId> {
        if self.texture_dirty {
            match &self.plot {
                Some(plot) => {
                    self.renderer.upload(ctx, &plot.grid, &self.palette);
                }
                None => self.renderer.clear(),
            }
            self.texture_dirty = false;
        }
        self.renderer.texture()
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Graph options");
        ui.horizontal(|ui| {
            ui.label("Vertices");
            ui.add(egui::Slider::new(&mut self.options.vertices, 1..=MAX_VERTICES));
        });

        let bounds = &mut self.options.bounds;
        egui::Grid::new("bounds").num_columns(4).show(ui, |ui| {
            ui.label("xmin");
            ui.add(egui::DragValue::new(&mut bounds.xmin).speed(1.0));
            ui.label("xmax");
            ui.add(egui::DragValue::new(&mut bounds.xmax).speed(1.0));
            ui.end_row();
            ui.label("ymin");
            ui.add(egui::DragValue::new(&mut bounds.ymin).speed(1.0));
            ui.label("ymax");
            ui.add(egui::DragValue::new(&mut bounds.ymax).speed(1.0));
            ui.end_row();
        });

        ui.horizontal(|ui| {
            ui.label("Seed");
            ui.add(egui::DragValue::new(&mut self.options.seed).speed(1));
            if ui.button("Randomize").clicked() {
                self.options.seed = rand::random();
                self.regenerate();
            }
        });

        ui.separator();
        if ui.button("Generate MST").clicked() {
            self.regenerate();
        }
        if ui
            .add_enabled(self.session.is_some(), egui::Button::new("New start vertex"))
            .clicked()
        {
            self.new_start_vertex();
        }

        if let Some(plot) = &self.plot {
            ui.separator();
            egui::Grid::new("summary").num_columns(2).show(ui, |ui| {
                ui.label("Vertices");
                ui.label(plot.vertex_count.as_str());
                ui.end_row();
                ui.label("Start vertex");
                ui.label(plot.start_location.as_str());
                ui.end_row();
                ui.label("Bounds");
                ui.label(format!(
                    "({}, {}) .. ({}, {})",
                    plot.xmin, plot.ymin, plot.xmax, plot.ymax
                ));
                ui.end_row();
                ui.label("MST distance");
                ui.strong(plot.distance_text.as_str());
                ui.end_row();
            });
        }
    }
}

impl eframe::App for PrimMstApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Prim minimum spanning tree");
            ui.label("Euclidean MST over random vertices, drawn on a fixed grid.");
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = match &self.plot {
                Some(plot) => plot.status_text.clone(),
                None => self.status.join(", "),
            };
            ui.label(text);
        });

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui));

        let texture_id = self.ensure_texture(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(texture_id), Some(plot)) = (texture_id, &self.plot) else {
                ui.label("No MST to display");
                return;
            };

            let label_width = 48.0;
            let available = ui.available_size() - egui::vec2(label_width, 24.0);
            let size = [plot.grid.columns() as f32, plot.grid.rows() as f32];
            let aspect = size[0] / size[1];
            let target_width = available.x.min(available.y * aspect).max(1.0);
            let target_height = target_width / aspect;

            ui.horizontal(|ui| {
                // ymax 在上
                ui.allocate_ui_with_layout(
                    egui::vec2(label_width, target_height),
                    Layout::top_down(Align::RIGHT),
                    |ui| {
                        let spacing = if plot.y_labels.len() > 1 {
                            target_height / (plot.y_labels.len() - 1) as f32 - 14.0
                        } else {
                            0.0
                        };
                        ui.spacing_mut().item_spacing.y = spacing.max(0.0);
                        for label in plot.y_labels.iter().rev() {
                            ui.small(label.as_str());
                        }
                    },
                );
                let image =
                    egui::Image::new((texture_id, egui::vec2(target_width, target_height)));
                ui.add(image);
            });

            ui.horizontal(|ui| {
                ui.add_space(label_width);
                let spacing = if plot.x_labels.len() > 1 {
                    target_width / (plot.x_labels.len() - 1) as f32 - 36.0
                } else {
                    0.0
                };
                ui.spacing_mut().item_spacing.x = spacing.max(0.0);
                for label in &plot.x_labels {
                    ui.small(label.as_str());
                }
            });
        });

        if ctx.input(|i| {
            i.key_pressed(egui::Key::R) && i.modifiers.matches_logically(egui::Modifiers::CTRL)
        }) {
            self.regenerate();
        }
    }
}
