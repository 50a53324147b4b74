use eframe::egui;

use crate::EditorApp;
use crate::app::state::{GRID_SIZE_CHOICES, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};

/// Grid size, cell size and grid-line controls.
pub fn grid_settings_panel(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Grid size");
        let mut changed = false;
        egui::ComboBox::from_id_salt("grid_size")
            .selected_text(format!("{0} x {0}", app.settings.grid_size))
            .show_ui(ui, |ui| {
                for choice in GRID_SIZE_CHOICES {
                    changed |= ui
                        .selectable_value(
                            &mut app.settings.grid_size,
                            choice,
                            format!("{choice} x {choice}"),
                        )
                        .changed();
                }
            });
        if changed {
            // Resizing starts the drawing over.
            app.apply_grid_size();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Cell size");
        let response = ui.add(
            egui::DragValue::new(&mut app.settings.pixel_size)
                .speed(1)
                .range(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE)
                .suffix(" px"),
        );
        if response.changed() {
            app.settings.clamp_pixel_size();
        }
    });

    ui.checkbox(&mut app.settings.show_grid_lines, "Show grid lines");

    ui.separator();
    ui.label("Controls:");
    ui.label("Left click: Paint");
    ui.label("C: Clear");
    ui.label("G: Toggle grid lines");
}
