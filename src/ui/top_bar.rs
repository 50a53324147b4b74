use eframe::egui;

use crate::EditorApp;
use crate::app::Tool;

pub fn top_bar(app: &mut EditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("quick_settings").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for tool in [Tool::Pencil, Tool::Fill, Tool::Eraser] {
                ui.selectable_value(&mut app.controller.active_tool, tool, tool.label());
            }

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear_grid();
            }

            let grid_label = if app.settings.show_grid_lines {
                "Hide Grid Lines"
            } else {
                "Show Grid Lines"
            };
            if ui.button(grid_label).clicked() {
                app.settings.show_grid_lines = !app.settings.show_grid_lines;
            }

            if ui.button("Export").clicked() {
                app.export_settings.chosen_path = None;
                app.export_message = None;
                app.show_export_modal = true;
            }
        });
    });
}
