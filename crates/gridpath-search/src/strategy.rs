use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, manhattan};

/// How the frontier orders candidate cells.
///
/// All strategies share one traversal; only the priority differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Cost so far plus Manhattan distance to the goal.
    ///
    /// Manhattan distance is admissible and consistent under unit-cost
    /// cardinal moves, so the returned path is always a shortest one.
    #[default]
    AStar,
    /// Manhattan distance to the goal only (greedy best-first).
    ///
    /// This ignores the cost already paid and is **not** guaranteed to find
    /// a shortest path, only some valid walk. It has been published under
    /// the name "dijkstra", which it is not; `"dijkstra"` still parses to
    /// this variant so existing callers keep their behaviour.
    HeuristicOnly,
    /// Cost so far only: real Dijkstra. Optimal, but explores more cells
    /// than A* on open grids.
    UniformCost,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::AStar,
        Strategy::HeuristicOnly,
        Strategy::UniformCost,
    ];

    /// Frontier priority of `cell`, reached at `cost`, when heading for
    /// `goal`. Lower is expanded first.
    #[inline]
    pub fn priority(self, cost: u32, cell: Coord, goal: Coord) -> u32 {
        let h = manhattan(cell, goal).unsigned_abs();
        match self {
            Self::AStar => cost.saturating_add(h),
            Self::HeuristicOnly => h,
            Self::UniformCost => cost,
        }
    }

    /// Whether paths from this strategy are guaranteed to be shortest.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::HeuristicOnly)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "a-star",
            Self::HeuristicOnly => "heuristic-only",
            Self::UniformCost => "uniform-cost",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(Self::AStar),
            "heuristic-only" | "heuristic" | "greedy" | "best-first" | "dijkstra" => {
                Ok(Self::HeuristicOnly)
            }
            "uniform-cost" | "uniform" | "ucs" => Ok(Self::UniformCost),
            other => Err(format!(
                "unknown strategy '{other}' (expected a-star, heuristic-only or uniform-cost)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities() {
        let goal = Coord::new(4, 3);
        let cell = Coord::new(1, 1);
        assert_eq!(Strategy::AStar.priority(2, cell, goal), 7);
        assert_eq!(Strategy::HeuristicOnly.priority(2, cell, goal), 5);
        assert_eq!(Strategy::UniformCost.priority(2, cell, goal), 2);
    }

    #[test]
    fn only_heuristic_only_is_unoptimal() {
        assert!(Strategy::AStar.is_optimal());
        assert!(Strategy::UniformCost.is_optimal());
        assert!(!Strategy::HeuristicOnly.is_optimal());
    }

    #[test]
    fn parse_and_display() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("dijkstra".parse::<Strategy>(), Ok(Strategy::HeuristicOnly));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::HeuristicOnly));
        assert_eq!("ucs".parse::<Strategy>(), Ok(Strategy::UniformCost));
        assert!("bfs".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::AStar);
    }
}
