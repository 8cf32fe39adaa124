//! Priority queue of discovered but not yet expanded boards.

use crate::puzzle_sliding16::state::Board;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    f_score: u32,
    /// Insertion counter, breaks ties between equal `f_score`s in favour of older entries.
    order: u64,
    board: Board
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, so the max-heap pops the lowest f_score first
        other.f_score.cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier of A* search, yields boards in increasing order of f-score.
///
/// Boards with equal f-scores are yielded in insertion order.
/// Scores are never updated: each board is expected to be pushed at most once.
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: u64
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity), pushed: 0 }
    }

    pub fn push(&mut self, board: Board, f_score: u32) {
        self.heap.push(Entry { f_score, order: self.pushed, board });
        self.pushed += 1;
    }

    /// Removes and returns the board with the lowest f-score, together with this score.
    pub fn pop(&mut self) -> Option<(Board, u32)> {
        self.heap.pop().map(|entry| (entry.board, entry.f_score))
    }

    #[inline] pub fn len(&self) -> usize { self.heap.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}
