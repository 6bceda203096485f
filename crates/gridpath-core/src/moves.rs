//! Atomic cardinal move commands and path translation.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Coord;

/// One cardinal step. `Up` decreases the row, `Left` decreases the column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in neighbour enumeration order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The `(drow, dcol)` offset of this move.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Self::Up => Coord::new(-1, 0),
            Self::Down => Coord::new(1, 0),
            Self::Left => Coord::new(0, -1),
            Self::Right => Coord::new(0, 1),
        }
    }

    /// The cell reached by taking this move from `from`.
    #[inline]
    pub fn apply(self, from: Coord) -> Coord {
        from + self.delta()
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The move that takes `from` to `to`, if they are cardinally adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.apply(from) == to)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Move {
    type Err = String;

    /// Accepts the move names and the `w`/`a`/`s`/`d` keys.
    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "w" => Ok(Self::Up),
            "down" | "s" => Ok(Self::Down),
            "left" | "l" | "a" => Ok(Self::Left),
            "right" | "r" | "d" => Ok(Self::Right),
            other => Err(format!("unknown move '{other}'")),
        }
    }
}

/// Translate a path into the moves that walk it, in order.
///
/// An empty or single-cell path yields no moves.
pub fn moves_from_path(path: &[Coord]) -> Result<Vec<Move>, GridError> {
    path.windows(2)
        .map(|w| Move::between(w[0], w[1]).ok_or(GridError::NotAdjacent { from: w[0], to: w[1] }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_and_opposite() {
        let c = Coord::new(2, 2);
        for m in Move::ALL {
            assert!(m.apply(c).is_adjacent(c));
            assert_eq!(m.opposite().apply(m.apply(c)), c);
        }
        assert_eq!(Move::Up.apply(c), Coord::new(1, 2));
        assert_eq!(Move::Right.apply(c), Coord::new(2, 3));
    }

    #[test]
    fn between_adjacent_only() {
        let c = Coord::new(0, 0);
        assert_eq!(Move::between(c, Coord::new(1, 0)), Some(Move::Down));
        assert_eq!(Move::between(c, Coord::new(0, -1)), Some(Move::Left));
        assert_eq!(Move::between(c, Coord::new(1, 1)), None);
        assert_eq!(Move::between(c, c), None);
    }

    #[test]
    fn path_to_moves() {
        let path = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
            Coord::new(0, 0),
        ];
        assert_eq!(
            moves_from_path(&path).unwrap(),
            vec![Move::Down, Move::Right, Move::Up, Move::Left]
        );
        assert!(moves_from_path(&[]).unwrap().is_empty());
        assert!(moves_from_path(&[Coord::new(3, 3)]).unwrap().is_empty());
    }

    #[test]
    fn path_with_gap_is_rejected() {
        let path = [Coord::new(0, 0), Coord::new(0, 2)];
        assert_eq!(
            moves_from_path(&path),
            Err(GridError::NotAdjacent {
                from: Coord::new(0, 0),
                to: Coord::new(0, 2)
            })
        );
    }

    #[test]
    fn parse_names_and_keys() {
        assert_eq!("up".parse::<Move>(), Ok(Move::Up));
        assert_eq!("S".parse::<Move>(), Ok(Move::Down));
        assert_eq!("a".parse::<Move>(), Ok(Move::Left));
        assert_eq!(" Right ".parse::<Move>(), Ok(Move::Right));
        assert!("north".parse::<Move>().is_err());
        assert_eq!(Move::Left.to_string(), "left");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn moves_serialize_lowercase() {
        let json = serde_json::to_string(&[Move::Up, Move::Right]).unwrap();
        assert_eq!(json, r#"["up","right"]"#);
    }
}
