use gridpath_core::{Coord, Passable};
use log::error;

use crate::distance::DistanceTable;
use crate::error::SearchError;
use crate::neighbors::Neighbors;

/// Recover the cell sequence from `start` to `goal` out of a populated
/// distance table.
///
/// Walks back from the goal, each time stepping to the free neighbour with
/// the smallest recorded distance (the first one in up, down, left, right
/// order on ties), until the start is reached. The result is in
/// start-to-goal order.
///
/// Fails with [`SearchError::UnreachableState`] if some cell on the way has
/// no neighbour strictly closer to the start. A table filled by a completed
/// search never does this, so the error signals a defect.
pub fn reconstruct_path<P: Passable + ?Sized>(
    grid: &P,
    table: &DistanceTable,
    start: Coord,
    goal: Coord,
) -> Result<Vec<Coord>, SearchError> {
    let mut path = vec![goal];
    let mut current = goal;
    let mut nbuf = Neighbors::new();

    while current != start {
        let here = table.get(current);
        let mut best: Option<(u32, Coord)> = None;
        for &n in nbuf.cardinal(current, |c| grid.is_free(c)) {
            let d = table.get(n);
            match best {
                Some((bd, _)) if d >= bd => {}
                _ => best = Some((d, n)),
            }
        }

        match best {
            Some((d, n)) if d < here => {
                path.push(n);
                current = n;
            }
            _ => {
                error!("path reconstruction stuck at {current} (distance {here})");
                return Err(SearchError::UnreachableState { at: current });
            }
        }
    }

    path.reverse();
    Ok(path)
}
