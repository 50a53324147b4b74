use eframe::egui;
use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};

use crate::{EditorApp, ui};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum PanelTab {
    Palette,
    Grid,
}

impl PanelTab {
    pub(crate) fn title(self) -> &'static str {
        match self {
            PanelTab::Palette => "Palette",
            PanelTab::Grid => "Grid",
        }
    }
}

pub(crate) fn default_dock() -> DockState<PanelTab> {
    let mut dock = DockState::new(vec![PanelTab::Palette]);
    dock.main_surface_mut()
        .split_below(NodeIndex::root(), 0.55, vec![PanelTab::Grid]);
    dock
}

struct PanelTabViewer<'a> {
    app: &'a mut EditorApp,
}

impl<'a> TabViewer for PanelTabViewer<'a> {
    type Tab = PanelTab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelTab::Palette => ui::palette::palette_panel(self.app, ui),
            PanelTab::Grid => ui::grid_settings::grid_settings_panel(self.app, ui),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }

    fn allowed_in_windows(&self, _tab: &mut Self::Tab) -> bool {
        true
    }
}

pub(crate) fn show_panel_dock(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("panel_dock")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.set_min_width(220.0);
            let mut dock_state = std::mem::replace(&mut app.dock, DockState::new(Vec::new()));
            {
                let mut viewer = PanelTabViewer { app };
                DockArea::new(&mut dock_state).show_inside(ui, &mut viewer);
            }
            app.dock = dock_state;
        });
}
