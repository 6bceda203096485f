//! The authoritative obstacle set for a fixed-size grid.
//!
//! [`ObstacleGrid`] keeps obstacle membership as a hash set, so lookups stay
//! O(1) however many obstacles the caller places. The dense table the
//! search engine consumes is produced on demand by
//! [`to_occupancy`](ObstacleGrid::to_occupancy); the grid can also be
//! searched directly since it implements [`Passable`].

use std::collections::HashSet;
use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Coord};
use crate::occupancy::Occupancy;
use crate::traits::Passable;

/// A `height × width` grid whose blocked cells are exactly its obstacle set.
///
/// With the `serde` feature, deserialization goes through
/// [`with_obstacles`](Self::with_obstacles), so every obstacle is
/// bounds-checked on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObstacleGrid {
    bounds: Bounds,
    obstacles: HashSet<Coord>,
}

impl ObstacleGrid {
    /// Create an obstacle-free grid.
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            bounds: Bounds::new(height, width),
            obstacles: HashSet::new(),
        }
    }

    /// Create a grid pre-populated with obstacles.
    ///
    /// Duplicates collapse; any out-of-bounds cell is an error.
    pub fn with_obstacles(
        height: i32,
        width: i32,
        obstacles: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(height, width);
        for c in obstacles {
            grid.add_obstacle(c)?;
        }
        Ok(grid)
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Whether `c` is in the obstacle set.
    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.obstacles.contains(&c)
    }

    /// Insert an obstacle. Returns `true` if the set changed.
    pub fn add_obstacle(&mut self, c: Coord) -> Result<bool, GridError> {
        if !self.bounds.contains(c) {
            return Err(GridError::OutOfBounds {
                coord: c,
                bounds: self.bounds,
            });
        }
        Ok(self.obstacles.insert(c))
    }

    /// Remove an obstacle. Returns `true` if the set changed.
    pub fn remove_obstacle(&mut self, c: Coord) -> bool {
        self.obstacles.remove(&c)
    }

    /// Flip a cell between free and blocked. Returns the new blocked state.
    pub fn toggle_obstacle(&mut self, c: Coord) -> Result<bool, GridError> {
        if self.remove_obstacle(c) {
            return Ok(false);
        }
        self.add_obstacle(c)?;
        Ok(true)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Iterate the obstacle set in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.obstacles.iter().copied()
    }

    /// Remove every obstacle.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Materialize the dense free/blocked table.
    pub fn to_occupancy(&self) -> Occupancy {
        let mut occ = Occupancy::free(self.bounds.height, self.bounds.width);
        for &c in &self.obstacles {
            // Membership is bounds-checked on insert.
            let _ = occ.set_blocked(c, true);
        }
        occ
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ObstacleGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            bounds: Bounds,
            obstacles: Vec<Coord>,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::with_obstacles(raw.bounds.height, raw.bounds.width, raw.obstacles)
            .map_err(serde::de::Error::custom)
    }
}

impl Passable for ObstacleGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        self.is_obstacle(c)
    }
}

impl From<&Occupancy> for ObstacleGrid {
    fn from(occ: &Occupancy) -> Self {
        let bounds = occ.bounds();
        Self {
            bounds,
            obstacles: bounds.iter().filter(|&c| occ.is_blocked(c)).collect(),
        }
    }
}

impl fmt::Display for ObstacleGrid {
    /// The 0/1 table, one bracketed row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.bounds.height {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.bounds.width {
                if col > 0 {
                    write!(f, ", ")?;
                }
                let v = u8::from(self.is_obstacle(Coord::new(row, col)));
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn obstacle_grid_json_round_trip() {
        let g = ObstacleGrid::with_obstacles(2, 3, [Coord::new(0, 1), Coord::new(1, 2)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: ObstacleGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn out_of_bounds_obstacle_is_rejected() {
        let json = r#"{"bounds":{"height":2,"width":2},
            "obstacles":[{"row":5,"col":5},{"row":-1,"col":0}]}"#;
        let err = serde_json::from_str::<ObstacleGrid>(json).unwrap_err();
        assert!(err.to_string().contains("outside"), "{err}");
    }

    #[test]
    fn negative_size_is_clamped() {
        let json = r#"{"bounds":{"height":-3,"width":2},"obstacles":[]}"#;
        let g: ObstacleGrid = serde_json::from_str(json).unwrap();
        assert_eq!(g.height(), 0);
        assert!(g.bounds().is_empty());
    }
}
