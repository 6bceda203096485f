use crate::geom::{Bounds, Coord};

/// Minimal grid interface consumed by the search engine.
pub trait Passable {
    /// The rectangle every searched cell must lie in.
    fn bounds(&self) -> Bounds;

    /// Whether an in-bounds cell is blocked. Callers check bounds first.
    fn is_blocked(&self, c: Coord) -> bool;

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    fn is_free(&self, c: Coord) -> bool {
        self.bounds().contains(c) && !self.is_blocked(c)
    }
}
