//! Reconstruction of the solution from parent links.

use crate::error::{PuzzleError, Result};
use crate::puzzle_sliding16::state::Board;

/// Follows parent links from `last` back to the board without parent and returns the boards in order from that board to `last`.
///
/// `parent_of` returns `None` for unknown boards and `Some(None)` for the start board.
/// At most `max_len` boards are followed, so a cycle of links is reported instead of looping forever.
pub fn reconstruct_path<F>(last: Board, parent_of: F, max_len: usize) -> Result<Vec<Board>>
where F: Fn(&Board) -> Option<Option<Board>>
{
    let mut path = Vec::new();
    let mut current = last;
    loop {
        if path.len() >= max_len {
            return Err(PuzzleError::BrokenParentChain { board: current.packed() });
        }
        path.push(current);
        match parent_of(&current) {
            Some(Some(parent)) => current = parent,
            Some(None) => break,
            None => return Err(PuzzleError::BrokenParentChain { board: current.packed() })
        }
    }
    path.reverse();
    Ok(path)
}
