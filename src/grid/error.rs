use thiserror::Error;

use super::grid::MAX_GRID_SIZE;

/// Errors raised by [`super::PixelGrid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {0} is out of range (1..={})", MAX_GRID_SIZE)]
    InvalidSize(usize),

    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
