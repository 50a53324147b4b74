use eframe::egui;
use eframe::egui::Color32;

use crate::EditorApp;
use crate::utils::color::{parse_hex, to_hex};

const SWATCH_SIZE: f32 = 26.0;
const SWATCHES_PER_ROW: usize = 5;

/// Swatch grid plus free color selection (picker button and hex entry).
pub fn palette_panel(app: &mut EditorApp, ui: &mut egui::Ui) {
    let mut picked = None;

    egui::Grid::new("palette_swatches")
        .spacing(egui::vec2(6.0, 6.0))
        .show(ui, |ui| {
            for (idx, &color) in app.palette.iter().enumerate() {
                if swatch(ui, color, color == app.controller.active_color) {
                    picked = Some(color);
                }
                if (idx + 1) % SWATCHES_PER_ROW == 0 {
                    ui.end_row();
                }
            }
        });

    if let Some(color) = picked {
        set_active_color(app, color);
    }

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Custom");
        let mut color = app.controller.active_color;
        if ui.color_edit_button_srgba(&mut color).changed() {
            set_active_color(app, color);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Hex");
        let edit = ui.add(egui::TextEdit::singleline(&mut app.hex_input).desired_width(80.0));
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let apply = ui.button("Apply").clicked();
        if submitted || apply {
            match parse_hex(&app.hex_input) {
                Some(color) => set_active_color(app, color),
                None => app.hex_input = to_hex(app.controller.active_color),
            }
        }
    });
}

fn set_active_color(app: &mut EditorApp, color: Color32) {
    app.controller.active_color = color;
    app.hex_input = to_hex(color);
}

/// A clickable color square; the active one gets a highlight ring.
fn swatch(ui: &mut egui::Ui, color: Color32, active: bool) -> bool {
    let size = egui::vec2(SWATCH_SIZE, SWATCH_SIZE);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 4.0, color);
    let stroke = if active {
        egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
    } else {
        egui::Stroke::new(1.0, Color32::from_gray(80))
    };
    painter.rect_stroke(rect, 4.0, stroke);

    response.clicked()
}
