use eframe::egui;

use crate::app::EditorApp;

/// Route pointer events to the controller. egui synthesizes the same pointer
/// events for touch input, so one path covers mouse and touch.
pub fn handle_input(
    app: &mut EditorApp,
    ctx: &egui::Context,
    response: &egui::Response,
    grid_rect: egui::Rect,
) {
    let events = ctx.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                if button != egui::PointerButton::Primary {
                    continue;
                }
                if pressed {
                    if response.hovered() {
                        if let Some((row, col)) = app.cell_at(pos, grid_rect) {
                            if app.controller.press_at(&mut app.grid, row, col) {
                                app.texture_dirty = true;
                            }
                        }
                    }
                } else {
                    // Releasing anywhere ends the stroke, even off the grid.
                    app.controller.release();
                }
            }

            egui::Event::PointerMoved(pos) => {
                if app.controller.is_drawing() {
                    if let Some((row, col)) = app.cell_at(pos, grid_rect) {
                        if app.controller.move_at(&mut app.grid, row, col) {
                            app.texture_dirty = true;
                        }
                    }
                }
            }

            egui::Event::PointerGone => {
                // A stroke survives the pointer leaving the window; only a
                // release ends it.
            }

            _ => {}
        }
    }
}
