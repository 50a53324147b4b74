use eframe::egui;
use eframe::egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use egui_dock::DockState;

use crate::app::controller::ToolController;
use crate::app::layout::{self, PanelTab};
use crate::app::input_handler;
use crate::app::state::{GridSettings, parse_grid_size_arg};
use crate::grid::PixelGrid;
use crate::styling;
use crate::ui;
use crate::ui::export_modal::ExportSettings;
use crate::utils::color::{BACKGROUND_COLOR, DEFAULT_PALETTE, to_hex};

/// Main egui application that owns the grid, tool state, panels, and the
/// texture mirroring the grid.
pub struct EditorApp {
    pub(crate) grid: PixelGrid,
    pub(crate) controller: ToolController,
    pub(crate) settings: GridSettings,
    pub(crate) palette: Vec<Color32>,
    pub(crate) hex_input: String,

    grid_texture: TextureHandle,
    pub(crate) texture_dirty: bool,
    pub(crate) dock: DockState<PanelTab>,

    pub(crate) show_export_modal: bool,
    pub(crate) export_settings: ExportSettings,
    pub(crate) export_message: Option<String>,
}

impl EditorApp {
    /// Initialize the theme, grid, controller and the grid texture.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        styling::apply_global_style(&cc.egui_ctx);

        let grid_size = parse_grid_size_arg();
        let grid = PixelGrid::new(grid_size, BACKGROUND_COLOR)
            .expect("startup grid size is clamped into a valid range");
        let controller = ToolController::new(DEFAULT_PALETTE[0]);

        let grid_texture =
            cc.egui_ctx
                .load_texture("pixel_grid", grid_image(&grid), TextureOptions::NEAREST);

        Self {
            grid,
            controller,
            settings: GridSettings::new(grid_size),
            palette: DEFAULT_PALETTE.to_vec(),
            hex_input: to_hex(DEFAULT_PALETTE[0]),
            grid_texture,
            texture_dirty: false,
            dock: layout::default_dock(),
            show_export_modal: false,
            export_settings: ExportSettings::new(),
            export_message: None,
        }
    }

    /// Map a screen position to grid coordinates, if it lands on a cell.
    pub(crate) fn cell_at(&self, pos: egui::Pos2, grid_rect: egui::Rect) -> Option<(usize, usize)> {
        if !grid_rect.contains(pos) {
            return None;
        }
        let cell = self.settings.pixel_size as f32;
        let col = ((pos.x - grid_rect.left()) / cell).floor() as usize;
        let row = ((pos.y - grid_rect.top()) / cell).floor() as usize;
        let n = self.grid.size();
        (row < n && col < n).then_some((row, col))
    }

    /// Reset every cell to the background.
    pub(crate) fn clear_grid(&mut self) {
        self.grid.clear(BACKGROUND_COLOR);
        self.texture_dirty = true;
        log::info!("cleared {0}x{0} grid", self.grid.size());
    }

    /// Apply a changed size selection; the grid starts over.
    pub(crate) fn apply_grid_size(&mut self) {
        if self.settings.grid_size == self.grid.size() {
            return;
        }
        match self.grid.resize(self.settings.grid_size, BACKGROUND_COLOR) {
            Ok(()) => {
                self.texture_dirty = true;
                log::info!("resized grid to {0}x{0}", self.grid.size());
            }
            Err(err) => {
                log::warn!("rejected grid size: {err}");
                self.settings.grid_size = self.grid.size();
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::top_bar::top_bar(self, ctx);
        layout::show_panel_dock(self, ctx);
        ui::export_modal::export_modal(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.texture_dirty {
                self.grid_texture
                    .set(grid_image(&self.grid), TextureOptions::NEAREST);
                self.texture_dirty = false;
            }

            let n = self.grid.size();
            let side = (n as u32 * self.settings.pixel_size) as f32;
            let (rect, response) =
                ui.allocate_at_least(ui.available_size(), egui::Sense::click_and_drag());

            // Center the grid in whatever space the panel got.
            let origin = rect.center() - egui::vec2(side, side) * 0.5;
            let grid_rect = egui::Rect::from_min_size(origin, egui::vec2(side, side));

            ui.painter().image(
                self.grid_texture.id(),
                grid_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            if self.settings.show_grid_lines {
                paint_grid_lines(ui.painter(), grid_rect, n, self.settings.pixel_size as f32);
            }

            input_handler::handle_input(self, ctx, &response, grid_rect);

            // Shortcuts stay quiet while a text field (the hex entry) has focus.
            if !ctx.wants_keyboard_input() {
                if ui.input(|i| i.key_pressed(egui::Key::C)) {
                    self.clear_grid();
                }
                if ui.input(|i| i.key_pressed(egui::Key::G)) {
                    self.settings.show_grid_lines = !self.settings.show_grid_lines;
                }
            }

            if self.texture_dirty || self.controller.is_drawing() {
                ctx.request_repaint();
            }
        });
    }
}

/// Snapshot the grid into a one-texel-per-cell image.
fn grid_image(grid: &PixelGrid) -> ColorImage {
    let n = grid.size();
    let mut img = ColorImage::new([n, n], Color32::TRANSPARENT);
    for (row, col, color) in grid.cells() {
        img.pixels[row * n + col] = color;
    }
    img
}

fn paint_grid_lines(painter: &egui::Painter, grid_rect: egui::Rect, n: usize, cell: f32) {
    let stroke = egui::Stroke::new(1.0, Color32::from_black_alpha(26));
    for i in 0..=n {
        let x = grid_rect.left() + i as f32 * cell;
        painter.line_segment(
            [egui::pos2(x, grid_rect.top()), egui::pos2(x, grid_rect.bottom())],
            stroke,
        );
        let y = grid_rect.top() + i as f32 * cell;
        painter.line_segment(
            [egui::pos2(grid_rect.left(), y), egui::pos2(grid_rect.right(), y)],
            stroke,
        );
    }
}
