use gridpath_core::{Bounds, Coord};

/// Sentinel distance of a cell the search has not reached.
pub const UNREACHED: u32 = u32::MAX;

/// Best-known step count from the start to every cell, stored row-major.
///
/// Scoped to one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    bounds: Bounds,
    dist: Vec<u32>,
}

impl DistanceTable {
    /// A table with every cell unreached except `start`, which is `0`.
    ///
    /// An out-of-bounds `start` leaves every cell unreached.
    pub fn new(bounds: Bounds, start: Coord) -> Self {
        let mut dist = vec![UNREACHED; bounds.len()];
        if let Some(i) = bounds.index(start) {
            dist[i] = 0;
        }
        Self { bounds, dist }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Recorded distance of `c`; [`UNREACHED`] for unreached or
    /// out-of-bounds cells.
    #[inline]
    pub fn get(&self, c: Coord) -> u32 {
        match self.bounds.index(c) {
            Some(i) => self.dist[i],
            None => UNREACHED,
        }
    }

    /// Lower the distance of `c` to `candidate` if that is smaller and
    /// return the resulting distance.
    #[inline]
    pub fn relax(&mut self, c: Coord, candidate: u32) -> u32 {
        match self.bounds.index(c) {
            Some(i) => {
                let d = &mut self.dist[i];
                *d = (*d).min(candidate);
                *d
            }
            None => UNREACHED,
        }
    }

    /// Overwrite the distance of an in-bounds cell.
    pub fn set(&mut self, c: Coord, value: u32) {
        if let Some(i) = self.bounds.index(c) {
            self.dist[i] = value;
        }
    }

    #[inline]
    pub fn is_reached(&self, c: Coord) -> bool {
        self.get(c) != UNREACHED
    }

    /// Number of cells with a finite distance.
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHED).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_zero_everything_else_unreached() {
        let t = DistanceTable::new(Bounds::new(3, 3), Coord::new(1, 2));
        assert_eq!(t.get(Coord::new(1, 2)), 0);
        assert_eq!(t.get(Coord::new(0, 0)), UNREACHED);
        assert_eq!(t.reached_count(), 1);
        assert!(!t.is_reached(Coord::new(5, 5)));
    }

    #[test]
    fn relax_keeps_minimum() {
        let mut t = DistanceTable::new(Bounds::new(2, 2), Coord::new(0, 0));
        let c = Coord::new(1, 1);
        assert_eq!(t.relax(c, 4), 4);
        assert_eq!(t.relax(c, 6), 4);
        assert_eq!(t.relax(c, 2), 2);
        assert_eq!(t.get(c), 2);
        assert_eq!(t.relax(Coord::new(9, 9), 1), UNREACHED);
    }

    #[test]
    fn out_of_bounds_start() {
        let t = DistanceTable::new(Bounds::new(2, 2), Coord::new(-1, 0));
        assert_eq!(t.reached_count(), 0);
    }
}
