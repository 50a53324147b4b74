//! egui panels for tools, colors, grid settings, and export.
pub mod export_modal;
pub mod grid_settings;
pub mod palette;
pub mod top_bar;
