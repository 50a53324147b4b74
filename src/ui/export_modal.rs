use std::path::{Path, PathBuf};

use eframe::egui;

use crate::EditorApp;
use crate::utils::exporter::{ExportFormat, render_image, save_image};

/// Modal dialog to export the drawing to disk with a native file picker.
///
/// The grid is at most 64 cells of 30 px blocks, so rendering and saving run
/// synchronously inside the click handler.
pub fn export_modal(app: &mut EditorApp, ctx: &egui::Context) {
    if !app.show_export_modal {
        return;
    }

    let mut open = app.show_export_modal;
    let mut close_requested = false;
    egui::Window::new("Export Image")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let settings = &mut app.export_settings;

            ui.horizontal(|ui| {
                ui.label("Format");
                egui::ComboBox::from_id_salt("export_format")
                    .selected_text(settings.format.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut settings.format, ExportFormat::Png, "PNG");
                        ui.selectable_value(&mut settings.format, ExportFormat::Jpeg, "JPEG");
                        ui.selectable_value(&mut settings.format, ExportFormat::Tiff, "TIFF");
                    });
            });

            let side = app.grid.size() as u32 * app.settings.pixel_size;
            ui.label(format!("Output: {side} x {side} px"));

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("File");
                let display = settings
                    .chosen_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| settings.default_file_name());
                ui.monospace(display);
                if ui.button("Choose...").clicked() {
                    if let Some(path) = pick_file(&settings.default_file_name()) {
                        settings.chosen_path = Some(path);
                    }
                }
            });

            if let Some(msg) = &app.export_message {
                ui.label(msg);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Export").clicked() {
                    let target = app.export_settings.output_path();
                    let img = render_image(&app.grid, app.settings.pixel_size);
                    app.export_message =
                        Some(match save_image(img, &target, app.export_settings.format) {
                            Ok(()) => format!("Saved to {}", target.display()),
                            Err(err) => format!("Export failed: {err}"),
                        });
                }
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });
        });

    app.show_export_modal = open && !close_requested;
}

fn pick_file(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .save_file()
}

/// Export settings tracked by the app between openings of the modal.
#[derive(Clone)]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub chosen_path: Option<PathBuf>,
    pub base_name: String,
}

impl ExportSettings {
    pub fn new() -> Self {
        Self {
            format: ExportFormat::Png,
            chosen_path: None,
            base_name: "pixel-art".to_string(),
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("{}.{}", self.base_name, self.format.extension())
    }

    /// The path the export writes to; a chosen path gets the format's
    /// extension enforced.
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.chosen_path {
            ensure_extension(path.clone(), self.format.extension())
        } else {
            Path::new(&self.default_file_name()).to_path_buf()
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_extension(mut path: PathBuf, ext: &str) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(current) if current.eq_ignore_ascii_case(ext) => path,
        _ => {
            path.set_extension(ext);
            path
        }
    }
}
