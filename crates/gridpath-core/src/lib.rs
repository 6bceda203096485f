//! Grid model types for 4-connected shortest-path search.
//!
//! This crate provides the foundational types shared by the *gridpath*
//! workspace: row/column coordinates, grid bounds, the obstacle-set
//! [`ObstacleGrid`], its dense [`Occupancy`] projection, and the atomic
//! [`Move`] commands a path is translated into.
//!
//! Search itself lives in `gridpath-search`; anything implementing
//! [`Passable`] can be searched.

pub mod error;
pub mod geom;
pub mod grid;
pub mod moves;
pub mod occupancy;
pub mod traits;

pub use error::GridError;
pub use geom::{Bounds, Coord, manhattan};
pub use grid::ObstacleGrid;
pub use moves::{Move, moves_from_path};
pub use occupancy::Occupancy;
pub use traits::Passable;
