use gridpath_core::{Coord, Passable};

/// Number of steps in a path. Empty and single-cell paths cost `0`.
#[inline]
pub fn path_cost(path: &[Coord]) -> usize {
    path.len().saturating_sub(1)
}

/// Whether every cell of `path` is free and consecutive cells are one
/// cardinal step apart. The empty path is trivially valid.
pub fn is_valid_walk<P: Passable + ?Sized>(grid: &P, path: &[Coord]) -> bool {
    path.iter().all(|&c| grid.is_free(c)) && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
