use crate::puzzle_sliding16::state::Board;
use crate::puzzle_sliding16::utils::LOWEST_BIT_OF_EACH_CELL;

/// Estimates the number of moves needed to reach the goal.
pub trait Heuristic {
    /// Returns the estimated number of moves from `board` to the goal.
    fn value(&self, board: &Board) -> u8;
}

/// Number of cells (the blank included) whose tile differs from the goal.
#[derive(Clone, Copy, Debug)]
pub struct Hamming {
    goal: Board
}

impl Hamming {
    #[inline] pub fn new(goal: Board) -> Self { Self { goal } }
}

impl Default for Hamming {
    #[inline] fn default() -> Self { Self::new(Board::goal()) }
}

impl Heuristic for Hamming {
    #[inline] fn value(&self, board: &Board) -> u8 {
        hamming_distance(board, &self.goal)
    }
}

/// Returns number of cells at which `a` and `b` hold different tiles.
#[inline] pub fn hamming_distance(a: &Board, b: &Board) -> u8 {
    let diff = a.packed() ^ b.packed();
    // fold each 4-bit cell to its lowest bit
    ((diff | diff >> 1 | diff >> 2 | diff >> 3) & LOWEST_BIT_OF_EACH_CELL).count_ones() as u8
}
