use gridpath_core::{Coord, Passable};
use log::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::distance::DistanceTable;
use crate::error::{Endpoint, EndpointReason, SearchError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::neighbors::Neighbors;
use crate::reconstruct::reconstruct_path;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// `[start, ..., goal]`, or empty when no route exists.
    pub path: Vec<Coord>,
    /// Frontier pops performed.
    pub expanded: usize,
    /// Frontier pushes performed, including the start.
    pub pushed: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Search for a path from `start` to `goal` and return only the path.
///
/// See [`search`].
pub fn find_path<P: Passable + ?Sized>(
    grid: &P,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
) -> Result<Vec<Coord>, SearchError> {
    search(grid, start, goal, config).map(|outcome| outcome.path)
}

/// Search for a path from `start` to `goal`.
///
/// Both endpoints must be in bounds and free, otherwise
/// [`SearchError::InvalidEndpoint`] is returned before any work is done.
/// When `start == goal` the path is `[start]`. When the goal cannot be
/// reached the path is empty; that is a normal outcome, not an error.
///
/// The frontier is seeded with the start. Each popped cell relaxes the
/// distance of its free neighbours; a neighbour is pushed the first time it
/// is seen and marked claimed at that moment, so it is never pushed again.
/// The search stops as soon as the goal is discovered as a neighbour and
/// the path is read back from the distance table.
pub fn search<P: Passable + ?Sized>(
    grid: &P,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    check_endpoint(grid, Endpoint::Start, start)?;
    check_endpoint(grid, Endpoint::Goal, goal)?;

    let strategy = config.strategy;
    debug!("{strategy} search {start} -> {goal}");

    if start == goal {
        return Ok(SearchOutcome {
            path: vec![start],
            expanded: 0,
            pushed: 0,
        });
    }

    let bounds = grid.bounds();
    let mut dist = DistanceTable::new(bounds, start);
    let mut claimed = vec![false; bounds.len()];
    let mut frontier = Frontier::new();
    let mut nbuf = Neighbors::new();

    frontier.push(FrontierEntry {
        coord: start,
        priority: strategy.priority(0, start, goal),
    });
    let mut pushed = 1;
    let mut expanded = 0;

    while !frontier.is_empty() {
        if let Some(cap) = config.max_expansions {
            if expanded >= cap {
                warn!("{strategy} search {start} -> {goal} aborted after {expanded} expansions");
                return Err(SearchError::SearchAborted {
                    expansions: expanded,
                });
            }
        }

        let current = frontier.pop_min()?.coord;
        expanded += 1;
        let base = dist.get(current);
        trace!("expand {current} at distance {base}");

        for &n in nbuf.cardinal(current, |c| grid.is_free(c)) {
            let d = dist.relax(n, base.saturating_add(1));

            if let Some(i) = bounds.index(n) {
                if !claimed[i] {
                    claimed[i] = true;
                    frontier.push(FrontierEntry {
                        coord: n,
                        priority: strategy.priority(d, n, goal),
                    });
                    pushed += 1;
                }
            }

            if n == goal {
                let path = reconstruct_path(grid, &dist, start, goal);
                debug_assert!(path.is_ok(), "search left an inconsistent distance table: {path:?}");
                let path = path?;
                debug!(
                    "{strategy} search found {} steps ({expanded} expanded, {pushed} pushed)",
                    path.len() - 1
                );
                return Ok(SearchOutcome {
                    path,
                    expanded,
                    pushed,
                });
            }
        }
    }

    debug!("{strategy} search {start} -> {goal}: no path ({expanded} expanded)");
    Ok(SearchOutcome {
        path: Vec::new(),
        expanded,
        pushed,
    })
}

fn check_endpoint<P: Passable + ?Sized>(
    grid: &P,
    endpoint: Endpoint,
    coord: Coord,
) -> Result<(), SearchError> {
    let reason = if !grid.bounds().contains(coord) {
        EndpointReason::OutOfBounds
    } else if grid.is_blocked(coord) {
        EndpointReason::Blocked
    } else {
        return Ok(());
    };
    Err(SearchError::InvalidEndpoint {
        endpoint,
        coord,
        reason,
    })
}
