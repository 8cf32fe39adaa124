//! Errors reported by board construction, move generation and search.

use std::fmt;

/// Errors of the `fifteen` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Board description does not have exactly 16 cells.
    WrongCellCount { found: usize },

    /// Cell holds a number that is not a tile of the 15-puzzle (0..=15).
    TileOutOfRange { cell: usize, tile: u32 },

    /// The same tile occupies more than one cell.
    DuplicateTile { tile: u8 },

    /// Board description contains a token that is not a number.
    InvalidNumber { text: String },

    /// The blank (at cell `blank`) cannot be moved to cell (`row`, `col`).
    InvalidMove { blank: u8, row: i16, col: i16 },

    /// All boards reachable from the start were expanded and the goal was not among them.
    Exhausted { discovered: usize },

    /// Search was stopped by the statistics collector after `expanded` expansions.
    Cancelled { expanded: usize },

    /// Parent chain of the solved board does not lead back to the start.
    BrokenParentChain { board: u64 },
}

impl PuzzleError {
    /// Returns `true` for errors caused by malformed input or invalid move requests.
    pub fn is_precondition(&self) -> bool {
        matches!(self,
            Self::WrongCellCount { .. } | Self::TileOutOfRange { .. } |
            Self::DuplicateTile { .. } | Self::InvalidNumber { .. } |
            Self::InvalidMove { .. })
    }

    /// Returns `true` if search finished without finding the goal (exhausted or cancelled).
    pub fn is_search_failure(&self) -> bool {
        matches!(self, Self::Exhausted { .. } | Self::Cancelled { .. })
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::WrongCellCount { found } => {
                write!(f, "board must have 16 cells, found {}", found)
            }
            PuzzleError::TileOutOfRange { cell, tile } => {
                write!(f, "cell {} holds {}, which is not in range 0..=15", cell, tile)
            }
            PuzzleError::DuplicateTile { tile } => {
                write!(f, "tile {} occurs more than once", tile)
            }
            PuzzleError::InvalidNumber { text } => {
                write!(f, "{:?} is not a tile number", text)
            }
            PuzzleError::InvalidMove { blank, row, col } => {
                write!(f, "blank at cell {} cannot be moved to ({}, {})", blank, row, col)
            }
            PuzzleError::Exhausted { discovered } => {
                write!(f, "goal is unreachable, all {} discovered boards expanded", discovered)
            }
            PuzzleError::Cancelled { expanded } => {
                write!(f, "search cancelled after {} expansions", expanded)
            }
            PuzzleError::BrokenParentChain { board } => {
                write!(f, "parent chain broken at board {:016x}", board)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

pub type Result<T> = std::result::Result<T, PuzzleError>;
