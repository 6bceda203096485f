//! Dense free/blocked table consumed by the search engine.
//!
//! An [`Occupancy`] is the `height × width` 0/1 projection of an
//! [`ObstacleGrid`](crate::ObstacleGrid). It can also be built directly from
//! nested rows or parsed from text:
//!
//! ```text
//! ..##
//! .#..
//! ....
//! ```
//!
//! `.` or `0` is a free cell, `#` or `1` a blocked one.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Bounds, Coord};
use crate::traits::Passable;

/// A rectangular table of free/blocked cells, stored row-major.
///
/// With the `serde` feature it (de)serializes as its 0/1 rows; rows are
/// validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct Occupancy {
    bounds: Bounds,
    blocked: Vec<bool>,
}

impl Occupancy {
    /// An all-free table of the given size.
    pub fn free(height: i32, width: i32) -> Self {
        let bounds = Bounds::new(height, width);
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
        }
    }

    /// Build from rows of flags: `0` is free, anything else is blocked.
    ///
    /// Every row must have the same length and there must be at least one
    /// cell.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut blocked = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            blocked.extend(row.iter().map(|&v| v != 0));
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, width as i32),
            blocked,
        })
    }

    /// The 0/1 rows of the table.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let w = self.bounds.width.max(0) as usize;
        if w == 0 {
            return Vec::new();
        }
        self.blocked
            .chunks(w)
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Mark a cell blocked or free. Out-of-bounds cells are rejected.
    pub fn set_blocked(&mut self, c: Coord, blocked: bool) -> Result<(), GridError> {
        let i = self.bounds.index(c).ok_or(GridError::OutOfBounds {
            coord: c,
            bounds: self.bounds,
        })?;
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Occupancy {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<Occupancy> for Vec<Vec<u8>> {
    fn from(occ: Occupancy) -> Self {
        occ.to_rows()
    }
}

impl Passable for Occupancy {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        match self.bounds.index(c) {
            Some(i) => self.blocked[i],
            None => false,
        }
    }
}

impl FromStr for Occupancy {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let r = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '.' | '0' => Ok(0),
                    '#' | '1' => Ok(1),
                    _ => Err(GridError::InvalidCell { ch, row: r, col }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Occupancy {
    /// One line per row, `.` for free and `#` for blocked cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.bounds.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.bounds.width {
                let ch = if self.is_blocked(Coord::new(row, col)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_marks_nonzero_blocked() {
        let occ = Occupancy::from_rows(&[vec![0u8, 1], vec![2, 0]]).unwrap();
        assert_eq!(occ.height(), 2);
        assert_eq!(occ.width(), 2);
        assert!(!occ.is_blocked(Coord::new(0, 0)));
        assert!(occ.is_blocked(Coord::new(0, 1)));
        assert!(occ.is_blocked(Coord::new(1, 0)));
        assert_eq!(occ.blocked_count(), 2);
        assert_eq!(occ.to_rows(), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        let err = Occupancy::from_rows(&[vec![0u8, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        let none: [Vec<u8>; 0] = [];
        assert_eq!(Occupancy::from_rows(&none).unwrap_err(), GridError::Empty);
        assert_eq!(
            Occupancy::from_rows(&[Vec::<u8>::new()]).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn is_free_checks_bounds() {
        let occ = Occupancy::free(2, 3);
        assert!(occ.is_free(Coord::new(1, 2)));
        assert!(!occ.is_free(Coord::new(2, 0)));
        assert!(!occ.is_free(Coord::new(0, -1)));
    }

    #[test]
    fn parse_text() {
        let occ: Occupancy = "
            ..##
            .#..
            0010
        "
        .parse()
        .unwrap();
        assert_eq!(
            occ.to_rows(),
            vec![vec![0, 0, 1, 1], vec![0, 1, 0, 0], vec![0, 0, 1, 0]]
        );
        assert_eq!(occ.to_string(), "..##\n.#..\n..#.");
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        let err = "..\n.x".parse::<Occupancy>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                ch: 'x',
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn set_blocked_in_and_out_of_bounds() {
        let mut occ = Occupancy::free(2, 2);
        occ.set_blocked(Coord::new(1, 1), true).unwrap();
        assert!(occ.is_blocked(Coord::new(1, 1)));
        occ.set_blocked(Coord::new(1, 1), false).unwrap();
        assert!(!occ.is_blocked(Coord::new(1, 1)));
        assert!(matches!(
            occ.set_blocked(Coord::new(2, 0), true),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}
