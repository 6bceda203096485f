//! Shortest-path search over uniform-cost, 4-connected obstacle grids.
//!
//! The engine computes a sequence of cardinal steps from a start cell to a
//! goal cell, avoiding blocked cells, and reports an empty path when no
//! route exists:
//!
//! - **A\*** ([`Strategy::AStar`]): accumulated cost plus Manhattan
//!   distance. Always optimal on these grids.
//! - **Heuristic-only best-first** ([`Strategy::HeuristicOnly`]): Manhattan
//!   distance alone. Fast but not optimal; historically labelled
//!   "dijkstra".
//! - **Uniform cost** ([`Strategy::UniformCost`]): accumulated cost alone,
//!   i.e. real Dijkstra. Optimal.
//!
//! All strategies share one traversal ([`search`]) and one backwards walk
//! over the distance table ([`reconstruct_path`]). Every call allocates its
//! own distance table, frontier and claimed set; nothing is kept between
//! calls.
//!
//! ```
//! use gridpath_core::{Coord, Occupancy};
//! use gridpath_search::{SearchConfig, find_path};
//!
//! let grid: Occupancy = "..\n#.".parse().unwrap();
//! let path = find_path(&grid, Coord::new(0, 0), Coord::new(1, 1), &SearchConfig::default()).unwrap();
//! assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
//! ```

mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod neighbors;
mod path;
mod reconstruct;
mod strategy;

pub use config::SearchConfig;
pub use distance::{DistanceTable, UNREACHED};
pub use engine::{SearchOutcome, find_path, search};
pub use error::{Endpoint, EndpointReason, SearchError};
pub use frontier::{Frontier, FrontierEntry};
pub use neighbors::Neighbors;
pub use path::{is_valid_walk, path_cost};
pub use reconstruct::reconstruct_path;
pub use strategy::Strategy;
