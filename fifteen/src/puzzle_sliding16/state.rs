use crate::error::{PuzzleError, Result};
use crate::puzzle_sliding16::utils::{BITS_PER_CELL, BITS_PER_CELL_MASK64, BOARD_SIZE, SIDE};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Board of the 15-puzzle.
///
/// Immutable value; moves produce new boards. Equality and hash cover all 16 cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by board indices (4 bits per cell), gives tiles numbers that occupy given board cell.
    board: u64
}

/// Packed goal: tile `i+1` at cell `i` and blank at the last cell.
const GOAL: u64 = {
    let mut board = 0u64;
    let mut cell = 0;
    while cell + 1 < BOARD_SIZE {
        board |= ((cell + 1) as u64) << (cell as u32 * BITS_PER_CELL as u32);
        cell += 1;
    }
    board
};

/// Returns index of the cell with given (`row`, `col`) coordinates.
#[inline(always)] pub fn cell_nr(row: u8, col: u8) -> u8 { row * SIDE + col }

/// Returns (row, col) coordinates of the given `cell`.
#[inline(always)] pub fn cell_coords(cell: u8) -> (u8, u8) { (cell / SIDE, cell % SIDE) }

impl Board {

    /// Returns the solved board: tiles 1 to 15 in row-major order, blank in the bottom-right corner.
    #[inline] pub const fn goal() -> Self {
        Self { board: GOAL }
    }

    /// Constructs board from tiles given in row-major order.
    ///
    /// Fails unless there are exactly 16 tiles and each of 0..=15 occurs once.
    pub fn from_tiles(tiles: impl IntoIterator<Item=u8>) -> Result<Self> {
        Self::from_numbers(tiles.into_iter().map(u32::from))
    }

    fn from_numbers(numbers: impl IntoIterator<Item=u32>) -> Result<Self> {
        let mut board = 0u64;
        let mut seen = 0u16;
        let mut cells = 0usize;
        for number in numbers {
            if cells < BOARD_SIZE {
                if number >= BOARD_SIZE as u32 {
                    return Err(PuzzleError::TileOutOfRange { cell: cells, tile: number });
                }
                let tile = number as u8;
                if seen & (1 << tile) != 0 {
                    return Err(PuzzleError::DuplicateTile { tile });
                }
                seen |= 1 << tile;
                board |= (tile as u64) << (cells as u32 * BITS_PER_CELL as u32);
            }
            cells += 1;
        }
        if cells != BOARD_SIZE { return Err(PuzzleError::WrongCellCount { found: cells }); }
        Ok(Self { board })
    }

    /// Returns the board packed into `u64`, 4 bits per cell, cell 0 at the lowest bits.
    #[inline(always)] pub fn packed(&self) -> u64 { self.board }

    /// Tile at position, which must be less than 16.
    #[inline] pub fn tile_at(&self, position: u8) -> u8 {
        debug_assert!(position < BOARD_SIZE as u8);
        ((self.board >> (position * BITS_PER_CELL)) & BITS_PER_CELL_MASK64) as u8
    }

    /// Tile at cell (`row`, `col`), both of which must be less than 4.
    #[inline] pub fn tile_at_coords(&self, row: u8, col: u8) -> u8 {
        debug_assert!(row < SIDE && col < SIDE);
        self.tile_at(cell_nr(row, col))
    }

    /// Returns index of the cell occupied by the blank.
    pub fn blank_position(&self) -> u8 {
        let mut rest = self.board;
        let mut position = 0;
        while rest & BITS_PER_CELL_MASK64 != 0 {
            rest >>= BITS_PER_CELL;
            position += 1;
        }
        debug_assert!(position < BOARD_SIZE as u8);
        position
    }

    #[inline] pub fn is_goal(&self) -> bool { self.board == GOAL }

    /// Returns copy of `self` with the blank (at `current_blank_position`) swapped with the tile at `new_blank_position`.
    pub(crate) fn moved_blank(&self, current_blank_position: u8, new_blank_position: u8) -> Self {
        debug_assert_eq!(self.tile_at(current_blank_position), 0);
        let new_blank_index = new_blank_position * BITS_PER_CELL;
        let tile = (self.board >> new_blank_index) & BITS_PER_CELL_MASK64;
        let mut board = self.board & !(BITS_PER_CELL_MASK64 << new_blank_index);  // clear cell which should be blank
        board |= tile << (current_blank_position * BITS_PER_CELL);  // set old blank cell to tile
        Self { board }
    }

    /// Returns tiles in row-major order.
    #[inline] pub fn iter(&self) -> TilesIterator {
        TilesIterator::new(self.board)
    }

    pub fn rows(&self) -> [[u8; SIDE as usize]; SIDE as usize] {
        let mut rows = [[0; SIDE as usize]; SIDE as usize];
        for (cell, tile) in self.iter().enumerate() {
            rows[cell / SIDE as usize][cell % SIDE as usize] = tile;
        }
        rows
    }
}

impl Default for Board {
    #[inline] fn default() -> Self { Self::goal() }
}

impl TryFrom<[u8; BOARD_SIZE]> for Board {
    type Error = PuzzleError;

    #[inline] fn try_from(tiles: [u8; BOARD_SIZE]) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

/// Parses 16 numbers separated by whitespace and/or commas.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let numbers = s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<u32>().map_err(|_| PuzzleError::InvalidNumber { text: token.to_owned() }))
            .collect::<Result<Vec<_>>>()?;
        Self::from_numbers(numbers)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, tile) in row.into_iter().enumerate() {
                if col != 0 { f.write_str(" ")?; }
                if tile == 0 { f.write_str("  ")?; } else { write!(f, "{:>2}", tile)?; }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

#[derive(Copy, Clone)]
pub struct TilesIterator {
    rest: u64,
    remaining: u8
}

impl TilesIterator {
    #[inline] pub fn new(board: u64) -> Self {
        Self { rest: board, remaining: BOARD_SIZE as u8 }
    }
}

impl Iterator for TilesIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        self.remaining -= 1;
        let result = (self.rest & BITS_PER_CELL_MASK64) as u8;
        self.rest >>= BITS_PER_CELL;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for TilesIterator {}

impl FusedIterator for TilesIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal() {
        let state = Board::goal();
        assert!(state.is_goal());
        for cell in 0..15 {
            assert_eq!(state.tile_at(cell), cell + 1);
        }
        assert_eq!(state.tile_at(15), 0);
        assert_eq!(state.blank_position(), 15);
        assert_eq!(state.tile_at_coords(1, 2), 7);
        assert_eq!(state.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);
    }

    #[test]
    fn test_from_and_move_blank() {
        let tiles = [2, 0, 5, 1,  4, 3, 6, 7,  8, 9, 10, 11,  12, 13, 14, 15];
        let state = Board::from_tiles(tiles).unwrap();
        assert_eq!(state.tile_at(0), 2);
        assert_eq!(state.tile_at(1), 0);
        assert_eq!(state.tile_at(2), 5);
        assert_eq!(state.blank_position(), 1);
        assert_eq!(state.iter().collect::<Vec<_>>(), &tiles);
        let moved = state.moved_blank(1, 5);
        assert_eq!(moved.tile_at(1), 3);    //<
        assert_eq!(moved.tile_at(5), 0);    //<
        assert_eq!(moved.blank_position(), 5);
        assert_eq!(state.tile_at(1), 0, "original board must not change");
        let moved = moved.moved_blank(5, 4);
        assert_eq!(moved.iter().collect::<Vec<_>>(), &[2, 3, 5, 1,  0, 4, 6, 7,  8, 9, 10, 11,  12, 13, 14, 15]);
    }

    #[test]
    fn test_blank_at_first_cell() {
        let state = Board::goal().moved_blank(15, 11).moved_blank(11, 7).moved_blank(7, 3)
            .moved_blank(3, 2).moved_blank(2, 1).moved_blank(1, 0);
        assert_eq!(state.blank_position(), 0);
        assert_eq!(state.tile_at(0), 0);
        assert_eq!(state.iter().filter(|t| *t == 0).count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_tile_at_outside_board() {
        Board::goal().tile_at(16);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_tile_at_coords_outside_board() {
        Board::goal().tile_at_coords(0, 4);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(Board::from_tiles(0..15), Err(PuzzleError::WrongCellCount { found: 15 }));
        assert_eq!(Board::from_tiles(0..17), Err(PuzzleError::WrongCellCount { found: 17 }));
        assert_eq!(Board::from_tiles([1, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
                   Err(PuzzleError::DuplicateTile { tile: 1 }));
        assert_eq!(Board::try_from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16]),
                   Err(PuzzleError::TileOutOfRange { cell: 15, tile: 16 }));
    }

    #[test]
    fn test_wrong_cell_count_reports_all_cells() {
        assert_eq!(Board::from_tiles((0..16).chain(0..2)), Err(PuzzleError::WrongCellCount { found: 18 }));
    }

    #[test]
    fn test_parse() {
        let board: Board = "1 2 3 4\n5 6 7 8\n9,10,11,12\n13, 14, 15, 0".parse().unwrap();
        assert_eq!(board, Board::goal());
        assert_eq!("1 2 x".parse::<Board>(), Err(PuzzleError::InvalidNumber { text: "x".to_owned() }));
        assert_eq!("1 2 3".parse::<Board>(), Err(PuzzleError::WrongCellCount { found: 3 }));
        assert_eq!("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 99".parse::<Board>(),
                   Err(PuzzleError::TileOutOfRange { cell: 15, tile: 99 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Board::goal().to_string(),
                   " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15   \n");
        assert_eq!(format!("{:?}", Board::goal()), "Board[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]");
    }

    #[test]
    fn test_rows_and_coords() {
        let rows = Board::goal().rows();
        assert_eq!(rows[0], [1, 2, 3, 4]);
        assert_eq!(rows[3], [13, 14, 15, 0]);
        assert_eq!(cell_nr(2, 1), 9);
        assert_eq!(cell_coords(9), (2, 1));
        assert_eq!(cell_coords(15), (3, 3));
    }
}
