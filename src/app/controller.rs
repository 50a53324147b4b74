use eframe::egui::Color32;

use crate::app::Tool;
use crate::grid::PixelGrid;

/// Translates resolved pointer events into grid mutations.
///
/// Owns the active tool, active color, and the drawing-in-progress flag.
/// Coordinates that miss the grid are swallowed as no-ops.
pub struct ToolController {
    pub active_tool: Tool,
    pub active_color: Color32,
    is_drawing: bool,
}

impl ToolController {
    pub fn new(active_color: Color32) -> Self {
        Self {
            active_tool: Tool::Pencil,
            active_color,
            is_drawing: false,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// The color the active tool paints with: the eraser always uses the
    /// grid background, independent of the selected color.
    fn paint_color(&self, grid: &PixelGrid) -> Color32 {
        match self.active_tool {
            Tool::Eraser => grid.background(),
            Tool::Pencil | Tool::Fill => self.active_color,
        }
    }

    /// Pointer pressed over a cell. Returns whether the grid changed.
    pub fn press_at(&mut self, grid: &mut PixelGrid, row: usize, col: usize) -> bool {
        self.is_drawing = true;
        let color = self.paint_color(grid);
        let changed = match self.active_tool {
            Tool::Fill => grid.flood_fill(row, col, color).map(|painted| painted > 0),
            Tool::Pencil | Tool::Eraser => grid.set(row, col, color),
        };
        match changed {
            Ok(changed) => changed,
            Err(err) => {
                log::debug!("ignoring press outside the grid: {err}");
                false
            }
        }
    }

    /// Pointer moved while pressed. The fill tool only acts on press, so a
    /// drag with it does nothing. Returns whether the grid changed.
    pub fn move_at(&mut self, grid: &mut PixelGrid, row: usize, col: usize) -> bool {
        if !self.is_drawing || self.active_tool == Tool::Fill {
            return false;
        }
        let color = self.paint_color(grid);
        grid.set(row, col, color).unwrap_or(false)
    }

    /// Pointer released, anywhere. Ends the stroke regardless of position.
    pub fn release(&mut self) {
        self.is_drawing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PixelGrid, ToolController) {
        let grid = PixelGrid::new(4, Color32::WHITE).unwrap();
        let controller = ToolController::new(Color32::RED);
        (grid, controller)
    }

    #[test]
    fn pencil_press_paints_the_active_color() {
        let (mut grid, mut controller) = setup();
        assert!(controller.press_at(&mut grid, 1, 2));
        assert!(controller.is_drawing());
        assert_eq!(grid.get(1, 2).unwrap(), Color32::RED);
    }

    #[test]
    fn eraser_paints_the_background_regardless_of_active_color() {
        let (mut grid, mut controller) = setup();
        grid.set(2, 2, Color32::BLUE).unwrap();
        controller.active_tool = Tool::Eraser;
        assert!(controller.press_at(&mut grid, 2, 2));
        assert_eq!(grid.get(2, 2).unwrap(), Color32::WHITE);
    }

    #[test]
    fn fill_press_floods_the_region() {
        let (mut grid, mut controller) = setup();
        controller.active_tool = Tool::Fill;
        assert!(controller.press_at(&mut grid, 0, 0));
        for (_, _, color) in grid.cells() {
            assert_eq!(color, Color32::RED);
        }
    }

    #[test]
    fn move_without_a_press_does_nothing() {
        let (mut grid, mut controller) = setup();
        assert!(!controller.move_at(&mut grid, 1, 1));
        assert_eq!(grid.get(1, 1).unwrap(), Color32::WHITE);
    }

    #[test]
    fn dragging_the_fill_tool_does_not_refill() {
        let (mut grid, mut controller) = setup();
        controller.active_tool = Tool::Fill;
        controller.press_at(&mut grid, 0, 0);
        controller.active_color = Color32::GREEN;
        assert!(!controller.move_at(&mut grid, 2, 2));
        assert_eq!(grid.get(2, 2).unwrap(), Color32::RED);
    }

    #[test]
    fn release_ends_the_stroke() {
        let (mut grid, mut controller) = setup();
        controller.press_at(&mut grid, 0, 0);
        controller.release();
        assert!(!controller.is_drawing());
        assert!(!controller.move_at(&mut grid, 3, 3));
        assert_eq!(grid.get(3, 3).unwrap(), Color32::WHITE);
    }

    #[test]
    fn out_of_bounds_events_are_ignored() {
        let (mut grid, mut controller) = setup();
        assert!(!controller.press_at(&mut grid, 9, 9));
        controller.press_at(&mut grid, 0, 0);
        assert!(!controller.move_at(&mut grid, 4, 0));
    }
}
