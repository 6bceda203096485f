//! Front-end pieces built on the gridpath engine.
//!
//! [`Scene`] is the headless state model of a robot walking to a goal over
//! an editable grid: manual moves, obstacle toggling, goal placement and an
//! autopilot that replays the planned path as move commands. [`Report`] is
//! the serializable summary printed by the `gridpath` binary.

mod report;
mod scene;

pub use report::Report;
pub use scene::{Scene, SceneError};

use gridpath_core::Coord;

/// Parse a `row,col` pair such as `"4,3"` or `"(4, 3)"`.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
    let (row, col) = inner
        .split_once(',')
        .ok_or_else(|| format!("expected 'row,col', got '{s}'"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row in '{s}': {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column in '{s}': {e}"))?;
    Ok(Coord::new(row, col))
}
