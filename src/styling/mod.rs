use eframe::egui;

/// Apply a cohesive dark theme tuned for staring at a bright canvas.
pub fn apply_global_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = egui::Color32::from_rgb(20, 22, 28);
    visuals.window_fill = egui::Color32::from_rgb(24, 27, 34);
    visuals.extreme_bg_color = egui::Color32::from_rgb(32, 36, 44);
    visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(38, 42, 52);
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(52, 70, 104);
    visuals.widgets.active.bg_fill = egui::Color32::from_rgb(76, 120, 184);
    visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(216, 220, 230);
    visuals.widgets.hovered.fg_stroke.color = egui::Color32::from_rgb(238, 242, 250);
    visuals.selection.bg_fill = egui::Color32::from_rgb(96, 160, 250);
    visuals.window_rounding = egui::Rounding::same(10.0);
    visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
    visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
    visuals.widgets.active.rounding = egui::Rounding::same(8.0);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}
