use std::fmt;

use gridpath_core::{Coord, GridError, Move, moves_from_path};
use gridpath_search::{SearchOutcome, Strategy};
use serde::Serialize;

/// Summary of one search, as printed by the `gridpath` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub start: Coord,
    pub goal: Coord,
    pub found: bool,
    pub steps: usize,
    pub expanded: usize,
    pub path: Vec<Coord>,
    pub moves: Vec<Move>,
}

impl Report {
    pub fn new(
        strategy: Strategy,
        start: Coord,
        goal: Coord,
        outcome: SearchOutcome,
    ) -> Result<Self, GridError> {
        let moves = moves_from_path(&outcome.path)?;
        Ok(Self {
            strategy,
            start,
            goal,
            found: outcome.found(),
            steps: moves.len(),
            expanded: outcome.expanded,
            path: outcome.path,
            moves,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found {
            return write!(
                f,
                "{}: no path from {} to {} ({} expanded)",
                self.strategy, self.start, self.goal, self.expanded
            );
        }
        writeln!(
            f,
            "{}: {} steps from {} to {} ({} expanded)",
            self.strategy, self.steps, self.start, self.goal, self.expanded
        )?;
        let cells: Vec<String> = self.path.iter().map(Coord::to_string).collect();
        writeln!(f, "path:  {}", cells.join(" "))?;
        let moves: Vec<&str> = self.moves.iter().map(|m| m.name()).collect();
        write!(f, "moves: {}", moves.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Occupancy;
    use gridpath_search::{SearchConfig, search};

    #[test]
    fn report_from_found_path() {
        let grid: Occupancy = "..\n#.".parse().unwrap();
        let (start, goal) = (Coord::new(0, 0), Coord::new(1, 1));
        let outcome = search(&grid, start, goal, &SearchConfig::default()).unwrap();
        let r = Report::new(Strategy::AStar, start, goal, outcome).unwrap();
        assert!(r.found);
        assert_eq!(r.steps, 2);
        assert_eq!(r.moves, vec![Move::Right, Move::Down]);
        assert_eq!(
            r.to_string(),
            "a-star: 2 steps from (0, 0) to (1, 1) (2 expanded)\n\
             path:  (0, 0) (0, 1) (1, 1)\n\
             moves: right down"
        );

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["strategy"], "a-star");
        assert_eq!(json["moves"], serde_json::json!(["right", "down"]));
        assert_eq!(json["path"][2], serde_json::json!({"row": 1, "col": 1}));
    }

    #[test]
    fn report_without_path() {
        let grid: Occupancy = ".#\n#.".parse().unwrap();
        let (start, goal) = (Coord::new(0, 0), Coord::new(1, 1));
        let outcome = search(&grid, start, goal, &SearchConfig::default()).unwrap();
        let r = Report::new(Strategy::AStar, start, goal, outcome).unwrap();
        assert!(!r.found);
        assert_eq!(r.steps, 0);
        assert_eq!(r.to_string(), "a-star: no path from (0, 0) to (1, 1) (1 expanded)");
    }
}
