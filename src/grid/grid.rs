use std::collections::VecDeque;

use eframe::egui::Color32;

use super::error::GridError;

/// Upper bound on the grid edge accepted by the model.
pub const MAX_GRID_SIZE: usize = 256;

/// Square grid of cell colors backed by a flat buffer, `row * n + col`.
///
/// Every cell always holds exactly one color; the background color is a
/// normal value, not an absence.
pub struct PixelGrid {
    size: usize,
    background: Color32,
    cells: Vec<Color32>,
}

impl PixelGrid {
    /// Create an `n x n` grid with every cell set to `background`.
    pub fn new(size: usize, background: Color32) -> Result<Self, GridError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            background,
            cells: vec![background; size * size],
        })
    }

    /// Edge length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The color the eraser and `clear` paint with.
    pub fn background(&self) -> Color32 {
        self.background
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Color at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Color32, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Overwrite a cell, returning whether it actually changed.
    pub fn set(&mut self, row: usize, col: usize, color: Color32) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        if self.cells[idx] == color {
            return Ok(false);
        }
        self.cells[idx] = color;
        Ok(true)
    }

    /// Repaint the maximal 4-connected region sharing the seed cell's color.
    ///
    /// Returns the number of repainted cells; 0 when the seed already holds
    /// `color`. The target color is captured once up front: the seed itself
    /// is repainted during traversal, so it must not be re-read for later
    /// comparisons.
    pub fn flood_fill(
        &mut self,
        row: usize,
        col: usize,
        color: Color32,
    ) -> Result<usize, GridError> {
        let seed = self.index(row, col)?;
        let target = self.cells[seed];
        if target == color {
            return Ok(0);
        }

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        visited[seed] = true;
        queue.push_back((row, col));
        let mut painted = 0;

        while let Some((r, c)) = queue.pop_front() {
            self.cells[r * self.size + c] = color;
            painted += 1;

            for (nr, nc) in self.neighbors(r, c).into_iter().flatten() {
                let nidx = nr * self.size + nc;
                if !visited[nidx] && self.cells[nidx] == target {
                    visited[nidx] = true;
                    queue.push_back((nr, nc));
                }
            }
        }

        Ok(painted)
    }

    /// 4-connected neighbors, edge-clipped. Diagonals are never adjacent.
    fn neighbors(&self, row: usize, col: usize) -> [Option<(usize, usize)>; 4] {
        [
            (row > 0).then(|| (row - 1, col)),
            (row + 1 < self.size).then(|| (row + 1, col)),
            (col > 0).then(|| (row, col - 1)),
            (col + 1 < self.size).then(|| (row, col + 1)),
        ]
    }

    /// Reset every cell to `background`.
    pub fn clear(&mut self, background: Color32) {
        self.background = background;
        self.cells.fill(background);
    }

    /// Replace the grid with a fresh one; content is not preserved.
    /// On an invalid size the current grid is left untouched.
    pub fn resize(&mut self, new_size: usize, background: Color32) -> Result<(), GridError> {
        *self = Self::new(new_size, background)?;
        Ok(())
    }

    /// All `(row, col, color)` triples in raster order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, color)| (idx / size, idx % size, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color32 = Color32::WHITE;
    const RED: Color32 = Color32::RED;
    const GREEN: Color32 = Color32::GREEN;
    const BLACK: Color32 = Color32::BLACK;

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = PixelGrid::new(8, WHITE).unwrap();
        grid.set(3, 5, RED).unwrap();
        assert_eq!(grid.get(3, 5).unwrap(), RED);
    }

    #[test]
    fn set_reports_whether_the_cell_changed() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        assert!(grid.set(0, 0, RED).unwrap());
        assert!(!grid.set(0, 0, RED).unwrap());
    }

    #[test]
    fn zero_and_oversized_grids_are_rejected() {
        assert_eq!(
            PixelGrid::new(0, WHITE).err(),
            Some(GridError::InvalidSize(0))
        );
        assert_eq!(
            PixelGrid::new(MAX_GRID_SIZE + 1, WHITE).err(),
            Some(GridError::InvalidSize(MAX_GRID_SIZE + 1))
        );
    }

    #[test]
    fn out_of_bounds_coordinates_error() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        let expected = GridError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(grid.get(4, 0).err(), Some(expected));
        assert_eq!(grid.set(4, 0, RED).err(), Some(expected));
        assert!(matches!(
            grid.get(0, 4),
            Err(GridError::OutOfBounds { col: 4, .. })
        ));
        assert!(matches!(
            grid.flood_fill(9, 9, RED),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        grid.set(1, 1, RED).unwrap();
        grid.set(2, 3, GREEN).unwrap();
        grid.clear(WHITE);
        for (_, _, color) in grid.cells() {
            assert_eq!(color, WHITE);
        }
    }

    #[test]
    fn resize_replaces_content() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        grid.set(0, 0, RED).unwrap();
        grid.resize(8, WHITE).unwrap();
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn failed_resize_leaves_the_grid_untouched() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        grid.set(0, 0, RED).unwrap();
        assert_eq!(grid.resize(0, WHITE).err(), Some(GridError::InvalidSize(0)));
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(0, 0).unwrap(), RED);
    }

    #[test]
    fn fill_on_uniform_grid_repaints_everything() {
        let mut grid = PixelGrid::new(8, WHITE).unwrap();
        let painted = grid.flood_fill(3, 3, GREEN).unwrap();
        assert_eq!(painted, 64);
        for (_, _, color) in grid.cells() {
            assert_eq!(color, GREEN);
        }
    }

    #[test]
    fn fill_with_the_seed_color_is_a_no_op() {
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        grid.set(1, 1, RED).unwrap();
        assert_eq!(grid.flood_fill(0, 0, WHITE).unwrap(), 0);
        assert_eq!(grid.get(1, 1).unwrap(), RED);
    }

    #[test]
    fn fill_is_idempotent() {
        let mut first = PixelGrid::new(6, WHITE).unwrap();
        first.set(2, 2, BLACK).unwrap();
        first.set(2, 3, BLACK).unwrap();
        first.flood_fill(0, 0, GREEN).unwrap();

        let mut twice = PixelGrid::new(6, WHITE).unwrap();
        twice.set(2, 2, BLACK).unwrap();
        twice.set(2, 3, BLACK).unwrap();
        twice.flood_fill(0, 0, GREEN).unwrap();
        assert_eq!(twice.flood_fill(0, 0, GREEN).unwrap(), 0);

        let a: Vec<_> = first.cells().collect();
        let b: Vec<_> = twice.cells().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn fill_on_a_single_cell_grid_touches_only_that_cell() {
        let mut grid = PixelGrid::new(1, WHITE).unwrap();
        assert_eq!(grid.flood_fill(0, 0, RED).unwrap(), 1);
        assert_eq!(grid.get(0, 0).unwrap(), RED);
    }

    #[test]
    fn fill_flows_around_a_blocked_center() {
        // 3x3 white grid with a red center: filling from a corner turns the
        // 8-cell ring green and leaves the center alone.
        let mut grid = PixelGrid::new(3, WHITE).unwrap();
        grid.set(1, 1, RED).unwrap();
        assert_eq!(grid.flood_fill(0, 0, GREEN).unwrap(), 8);
        for (row, col, color) in grid.cells() {
            if (row, col) == (1, 1) {
                assert_eq!(color, RED);
            } else {
                assert_eq!(color, GREEN);
            }
        }
    }

    #[test]
    fn fill_does_not_cross_diagonals() {
        // 4x4 checkerboard: only the 8 cells matching the seed's color are
        // repainted; diagonal contact is not adjacency.
        let mut grid = PixelGrid::new(4, WHITE).unwrap();
        for (row, col) in (0..4).flat_map(|r| (0..4).map(move |c| (r, c))) {
            let color = if (row + col) % 2 == 0 { BLACK } else { WHITE };
            grid.set(row, col, color).unwrap();
        }

        assert_eq!(grid.flood_fill(0, 0, RED).unwrap(), 8);
        for (row, col, color) in grid.cells() {
            if (row + col) % 2 == 0 {
                assert_eq!(color, RED, "seed-colored cell ({row}, {col})");
            } else {
                assert_eq!(color, WHITE, "off-color cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn regions_separated_by_a_border_fill_independently() {
        // Two white regions split by a black middle column.
        let mut grid = PixelGrid::new(5, WHITE).unwrap();
        for row in 0..5 {
            grid.set(row, 2, BLACK).unwrap();
        }

        assert_eq!(grid.flood_fill(0, 0, GREEN).unwrap(), 10);
        for row in 0..5 {
            for col in 3..5 {
                assert_eq!(grid.get(row, col).unwrap(), WHITE);
            }
            assert_eq!(grid.get(row, 2).unwrap(), BLACK);
        }
    }
}
