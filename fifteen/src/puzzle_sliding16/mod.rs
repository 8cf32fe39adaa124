//! The 4x4 sliding puzzle: boards, moves and heuristics.

pub mod utils;
pub mod state;
pub mod neighbors;
pub mod heuristic;
