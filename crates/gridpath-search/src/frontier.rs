use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Coord;

use crate::error::SearchError;

/// A coordinate waiting in the [`Frontier`] with its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub coord: Coord,
    pub priority: u32,
}

/// Heap slot: the entry plus its insertion number, used to break ties.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Slot {
    entry: FrontierEntry,
    seq: u64,
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .entry
            .priority
            .cmp(&self.entry.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of coordinates.
///
/// Ties are broken by insertion order, so a run is deterministic. There is
/// no decrease-key: the engine avoids duplicates with its claimed set
/// instead.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Slot>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Slot { entry, seq });
    }

    /// Remove and return the lowest-priority entry.
    pub fn pop_min(&mut self) -> Result<FrontierEntry, SearchError> {
        self.heap
            .pop()
            .map(|slot| slot.entry)
            .ok_or(SearchError::EmptyFrontier)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
