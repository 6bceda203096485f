//! Errors raised while building grids or translating paths.

use std::fmt;

use crate::geom::{Bounds, Coord};

/// Errors that can occur when constructing or editing a grid, or when
/// converting a path into move commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid description has no rows or no columns.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither a free nor a blocked marker.
    InvalidCell { ch: char, row: usize, col: usize },
    /// A cell outside the grid was passed where an in-bounds cell is required.
    OutOfBounds { coord: Coord, bounds: Bounds },
    /// Two consecutive path cells are not one cardinal step apart.
    NotAdjacent { from: Coord, to: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { ch, row, col } => write!(
                f,
                "invalid grid cell \u{201c}{ch}\u{201d} at row {row}, col {col}"
            ),
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "cell {coord} is outside the {bounds} grid")
            }
            Self::NotAdjacent { from, to } => {
                write!(f, "path step {from} -> {to} is not a single cardinal move")
            }
        }
    }
}

impl std::error::Error for GridError {}
