use crate::error::{PuzzleError, Result};
use crate::frontier::Frontier;
use crate::path::reconstruct_path;
use crate::puzzle_sliding16::heuristic::{Hamming, Heuristic};
use crate::puzzle_sliding16::neighbors::{Direction, MoveGenerator, move_direction};
use crate::puzzle_sliding16::state::Board;
use crate::stats::SearchStatsCollector;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Default number of boards the solver reserves room for.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// What the search knows about a discovered board.
#[derive(Copy, Clone, Debug)]
struct SearchNode {
    /// Board from which this one was discovered, `None` for the start board.
    parent: Option<Board>,
    /// Number of moves from the start board.
    depth: u32,
    heuristic_value: u8
}

impl SearchNode {
    #[inline] fn f_score(&self) -> u32 { self.depth + self.heuristic_value as u32 }
}

/// Sequence of boards from the start board to the goal, each differing from the previous one by a single move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    boards: Vec<Board>
}

impl Solution {
    #[inline] pub fn boards(&self) -> &[Board] { &self.boards }

    #[inline] pub fn into_boards(self) -> Vec<Board> { self.boards }

    /// Returns number of moves.
    #[inline] pub fn moves(&self) -> usize { self.boards.len() - 1 }

    #[inline] pub fn start(&self) -> Board { self.boards[0] }

    #[inline] pub fn last(&self) -> Board { self.boards[self.boards.len() - 1] }

    /// Returns directions in which the blank moves.
    pub fn directions(&self) -> Vec<Direction> {
        self.boards.windows(2).filter_map(|pair| move_direction(&pair[0], &pair[1])).collect()
    }

    /// Returns names of the moves (see `Direction::label`).
    pub fn labels(&self) -> Vec<&'static str> {
        self.directions().into_iter().map(Direction::label).collect()
    }
}

/// A* solver of the 15-puzzle.
///
/// Each board is scored once, when it is discovered, and never re-scored.
/// Among boards with equal f-scores, the one discovered first is expanded first.
pub struct AStarSolver<H: Heuristic = Hamming> {
    pub moves: MoveGenerator,

    pub goal: Board,

    pub heuristic: H,

    /// Number of boards the discovered map and the frontier reserve room for.
    pub initial_capacity: usize
}

impl AStarSolver<Hamming> {
    /// Returns solver that uses Hamming heuristic and the standard goal board.
    pub fn new() -> Self {
        Self::with_heuristic(Board::goal(), Hamming::default())
    }
}

impl Default for AStarSolver<Hamming> {
    #[inline] fn default() -> Self { Self::new() }
}

impl<H: Heuristic> AStarSolver<H> {

    pub fn with_heuristic(goal: Board, heuristic: H) -> Self {
        Self { moves: MoveGenerator::new(), goal, heuristic, initial_capacity: DEFAULT_CAPACITY }
    }

    /// Returns the sequence of boards from `start` to the goal.
    /// Collect statistics during search.
    ///
    /// Fails with `PuzzleError::Exhausted` if the goal is not reachable from `start`
    /// and with `PuzzleError::Cancelled` if `stats` cancels the search.
    pub fn solve_stats(&self, start: Board, stats: &mut impl SearchStatsCollector) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("astar_search", start = ?start);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut discovered = HashMap::<Board, SearchNode>::with_capacity(self.initial_capacity);
        let mut frontier = Frontier::with_capacity(self.initial_capacity);
        let start_node = SearchNode { parent: None, depth: 0, heuristic_value: self.heuristic.value(&start) };
        discovered.insert(start, start_node);
        stats.discovered();
        frontier.push(start, start_node.f_score());

        let mut expanded = 0usize;
        while let Some((board, _)) = frontier.pop() {
            if board == self.goal {
                #[cfg(feature = "tracing")]
                tracing::debug!(expanded, discovered = discovered.len(), "goal reached");
                return self.reconstruct(board, &discovered);
            }
            if !stats.expanded() { return Err(PuzzleError::Cancelled { expanded }); }
            expanded += 1;
            let depth = match discovered.get(&board) {
                Some(node) => node.depth + 1,   // depth of neighbors
                None => return Err(PuzzleError::BrokenParentChain { board: board.packed() })
            };
            for neighbor in self.moves.successors(&board) {
                if let Entry::Vacant(entry) = discovered.entry(neighbor) {
                    let node = entry.insert(SearchNode {
                        parent: Some(board),
                        depth,
                        heuristic_value: self.heuristic.value(&neighbor)
                    });
                    stats.discovered();
                    frontier.push(neighbor, node.f_score());
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(expanded, discovered = discovered.len(), "frontier exhausted");
        Err(PuzzleError::Exhausted { discovered: discovered.len() })
    }

    /// Returns the sequence of boards from `start` to the goal.
    #[inline] pub fn solve(&self, start: Board) -> Result<Solution> {
        self.solve_stats(start, &mut ())
    }

    /// Returns number of moves the found solution of `start` has.
    #[inline] pub fn moves_to_solve(&self, start: Board) -> Result<usize> {
        self.solve(start).map(|solution| solution.moves())
    }

    fn reconstruct(&self, last: Board, discovered: &HashMap<Board, SearchNode>) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("reconstruct");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let boards = reconstruct_path(last, |board| discovered.get(board).map(|node| node.parent), discovered.len())?;
        debug_assert_eq!(discovered.get(&last).map(|node| node.depth as usize + 1), Some(boards.len()));
        Ok(Solution { boards })
    }
}
