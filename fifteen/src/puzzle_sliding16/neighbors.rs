use crate::error::{PuzzleError, Result};
use crate::puzzle_sliding16::state::{Board, cell_coords, cell_nr};
use crate::puzzle_sliding16::utils::{BOARD_SIZE, DENIED, SIDE};
use arrayvec::ArrayVec;
use std::fmt;

pub const LEFT: usize = 0;
pub const UP: usize  = 1;
pub const RIGHT: usize  = 2;
pub const DOWN: usize  = 3;

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = [[u8; 4]; BOARD_SIZE];

/// Direction in which the blank moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left = LEFT as isize,
    Up = UP as isize,
    Right = RIGHT as isize,
    Down = DOWN as isize
}

impl Direction {
    /// All directions, in the order of `Neighbors` columns.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    #[inline] pub fn displacement(self) -> Displacement {
        match self {
            Direction::Left => Displacement::new(0, -1),
            Direction::Up => Displacement::new(-1, 0),
            Direction::Right => Displacement::new(0, 1),
            Direction::Down => Displacement::new(1, 0),
        }
    }

    /// Returns direction of the given unit `displacement`, or `None` if it is not a single step.
    pub fn from_displacement(displacement: Displacement) -> Option<Self> {
        match (displacement.rows, displacement.cols) {
            (0, -1) => Some(Direction::Left),
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            _ => None
        }
    }

    /// Name of the move, as seen by the tile that slides into the blank.
    ///
    /// Blank going to a lower column is reported as "right", to a higher column as "left",
    /// to a lower row as "down" and to a higher row as "up".
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "right",
            Direction::Right => "left",
            Direction::Up => "down",
            Direction::Down => "up",
        }
    }

    /// First letter of `label`.
    pub fn short_label(self) -> char {
        match self {
            Direction::Left => 'r',
            Direction::Right => 'l',
            Direction::Up => 'd',
            Direction::Down => 'u',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative displacement of the blank, in rows and columns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Displacement {
    pub rows: i8,
    pub cols: i8
}

impl Displacement {
    #[inline] pub const fn new(rows: i8, cols: i8) -> Self { Self { rows, cols } }

    /// Returns `true` if `self` is a step along exactly one axis.
    #[inline] pub fn is_unit(&self) -> bool {
        let (rows, cols) = (self.rows as i16, self.cols as i16);
        rows.abs() + cols.abs() == 1 && rows * cols == 0
    }
}

/// Constructs neighbors matrix for the 4x4 board.
pub fn construct_neighbors() -> Neighbors {
    let mut neighbors = [[DENIED; 4]; BOARD_SIZE];
    for r in 0..SIDE {
        for c in 0..SIDE {
            let cell = &mut neighbors[cell_nr(r, c) as usize];
            if c != 0 { cell[LEFT] = cell_nr(r, c-1); }
            if r != 0 { cell[UP] = cell_nr(r-1, c); }
            if c+1 != SIDE { cell[RIGHT] = cell_nr(r, c+1); }
            if r+1 != SIDE { cell[DOWN] = cell_nr(r+1, c); }
        }
    }
    neighbors
}

/// Returns neighbors (cell numbers) of the given `cell`.
pub fn neighbors_of(neighbors: &Neighbors, cell: u8) -> ArrayVec::<u8, 4> {
    let mut result = ArrayVec::<u8, 4>::new();
    for dir in 0..4 {
        let neighbor_pos = neighbors[cell as usize][dir];
        if neighbor_pos != DENIED {
            result.push(neighbor_pos);
        }
    }
    result
}

/// Returns direction in which the blank moved between `previous` and `next`,
/// or `None` if the blank moved by other than a single step.
pub fn move_direction(previous: &Board, next: &Board) -> Option<Direction> {
    let (prev_row, prev_col) = cell_coords(previous.blank_position());
    let (next_row, next_col) = cell_coords(next.blank_position());
    Direction::from_displacement(Displacement::new(
        next_row as i8 - prev_row as i8,
        next_col as i8 - prev_col as i8))
}

/// Generates boards reachable by one move of the blank.
#[derive(Clone, Copy)]
pub struct MoveGenerator {
    /// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
    pub neighbors: Neighbors
}

impl Default for MoveGenerator {
    #[inline] fn default() -> Self { Self::new() }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self { neighbors: construct_neighbors() }
    }

    /// Returns neighbors (cell numbers) of the given `cell`.
    #[inline(always)] pub fn neighbors_of_cell(&self, cell: u8) -> ArrayVec<u8, 4> {
        neighbors_of(&self.neighbors, cell)
    }

    /// Returns all boards reachable from `board` by a single move of the blank.
    pub fn successors(&self, board: &Board) -> ArrayVec<Board, 4> {
        let blank_pos = board.blank_position();
        self.neighbors_of_cell(blank_pos).into_iter()
            .map(|neighbor_cell| board.moved_blank(blank_pos, neighbor_cell))
            .collect()
    }

    /// Checks whether the blank of `board` can be moved to the cell (`row`, `col`).
    pub fn is_valid_move(&self, board: &Board, row: i16, col: i16) -> bool {
        if row < 0 || row >= SIDE as i16 || col < 0 || col >= SIDE as i16 { return false; }
        let (blank_row, blank_col) = cell_coords(board.blank_position());
        // both cells are on the board, so the differences fit in i8
        Displacement::new((row - blank_row as i16) as i8, (col - blank_col as i16) as i8).is_unit()
    }

    /// Moves the blank of `board` to the cell (`row`, `col`).
    /// Fails with `PuzzleError::InvalidMove` if the cell is outside the board or is not adjacent to the blank.
    pub fn move_blank_to(&self, board: &Board, row: i16, col: i16) -> Result<Board> {
        let blank_pos = board.blank_position();
        if !self.is_valid_move(board, row, col) {
            return Err(PuzzleError::InvalidMove { blank: blank_pos, row, col });
        }
        Ok(board.moved_blank(blank_pos, cell_nr(row as u8, col as u8)))
    }

    /// Moves the blank of `board` by `displacement`.
    pub fn apply(&self, board: &Board, displacement: Displacement) -> Result<Board> {
        let (blank_row, blank_col) = cell_coords(board.blank_position());
        self.move_blank_to(board,
                           blank_row as i16 + displacement.rows as i16,
                           blank_col as i16 + displacement.cols as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_4x4() {
        let neighbors = construct_neighbors();
        assert_eq!(neighbors[cell_nr(0, 0) as usize][LEFT], DENIED);
        assert_eq!(neighbors[cell_nr(0, 0) as usize][UP], DENIED);
        assert_eq!(neighbors[cell_nr(0, 0) as usize][RIGHT], cell_nr(0, 1));
        assert_eq!(neighbors[cell_nr(0, 0) as usize][DOWN], cell_nr(1, 0));
        assert_eq!(neighbors_of(&neighbors, cell_nr(0, 0)).len(), 2);

        assert_eq!(neighbors[cell_nr(1, 1) as usize][LEFT], cell_nr(1, 0));
        assert_eq!(neighbors[cell_nr(1, 1) as usize][UP], cell_nr(0, 1));
        assert_eq!(neighbors[cell_nr(1, 1) as usize][RIGHT], cell_nr(1, 2));
        assert_eq!(neighbors[cell_nr(1, 1) as usize][DOWN], cell_nr(2, 1));
        assert_eq!(neighbors_of(&neighbors, cell_nr(1, 1)).len(), 4);

        assert_eq!(neighbors[cell_nr(3, 2) as usize][DOWN], DENIED);
        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 2)).len(), 3);
        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 3)).len(), 2);
    }

    #[test]
    fn test_successors_of_goal() {
        let generator = MoveGenerator::new();
        let goal = Board::goal();
        let successors: HashSet<Board> = generator.successors(&goal).into_iter().collect();
        let expected: HashSet<Board> = [
            Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap(),
            Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]).unwrap(),
        ].into_iter().collect();
        assert_eq!(successors, expected);
        assert!(goal.is_goal(), "input must not change");
    }

    #[test]
    fn test_successors_keep_tiles() {
        let generator = MoveGenerator::new();
        let board = generator.apply(&Board::goal(), Direction::Up.displacement()).unwrap();
        let board = generator.apply(&board, Direction::Left.displacement()).unwrap();
        let successors = generator.successors(&board);
        assert_eq!(successors.len(), 4);
        for successor in successors {
            let mut tiles: Vec<u8> = successor.iter().collect();
            tiles.sort();
            assert_eq!(tiles, (0..16).collect::<Vec<u8>>());
            assert_ne!(successor, board);
        }
    }

    #[test]
    fn test_moves_agree_with_displacements() {
        let generator = MoveGenerator::new();
        let board = generator.apply(&Board::goal(), Displacement::new(0, -1)).unwrap();
        let successors = generator.successors(&board);
        let mut valid = 0;
        for direction in Direction::ALL {
            if let Ok(next) = generator.apply(&board, direction.displacement()) {
                assert!(successors.contains(&next));
                assert_eq!(move_direction(&board, &next), Some(direction));
                valid += 1;
            }
        }
        assert_eq!(valid, successors.len());
        assert_eq!(valid, 3);
    }

    #[test]
    fn test_invalid_moves() {
        let generator = MoveGenerator::new();
        let goal = Board::goal();
        assert_eq!(generator.apply(&goal, Displacement::new(0, 1)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3, col: 4 }));
        assert_eq!(generator.apply(&goal, Displacement::new(1, 0)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 4, col: 3 }));
        assert_eq!(generator.apply(&goal, Displacement::new(-1, -1)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 2, col: 2 }));
        assert_eq!(generator.apply(&goal, Displacement::new(0, -2)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3, col: 1 }));
        assert_eq!(generator.move_blank_to(&goal, 3, 3),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3, col: 3 }));
        assert!(generator.is_valid_move(&goal, 2, 3));
        assert!(!generator.is_valid_move(&goal, -1, 3));
    }

    #[test]
    fn test_extreme_displacements() {
        let generator = MoveGenerator::new();
        let goal = Board::goal();
        assert_eq!(generator.apply(&goal, Displacement::new(i8::MAX, 0)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3 + i8::MAX as i16, col: 3 }));
        assert_eq!(generator.apply(&goal, Displacement::new(0, i8::MIN)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3, col: 3 + i8::MIN as i16 }));
        assert_eq!(generator.apply(&goal, Displacement::new(i8::MIN, i8::MIN)),
                   Err(PuzzleError::InvalidMove { blank: 15, row: 3 + i8::MIN as i16, col: 3 + i8::MIN as i16 }));
        assert!(!Displacement::new(i8::MIN, 0).is_unit());
        assert!(!Displacement::new(i8::MAX, i8::MAX).is_unit());
        assert!(!Displacement::new(i8::MIN, 1).is_unit());
    }

    #[test]
    fn test_displacement() {
        assert!(Displacement::new(1, 0).is_unit());
        assert!(Displacement::new(0, -1).is_unit());
        assert!(!Displacement::new(0, 0).is_unit());
        assert!(!Displacement::new(1, 1).is_unit());
        assert!(!Displacement::new(2, -1).is_unit());
        for direction in Direction::ALL {
            assert_eq!(Direction::from_displacement(direction.displacement()), Some(direction));
        }
    }

    #[test]
    fn test_labels() {
        let generator = MoveGenerator::new();
        let goal = Board::goal();
        let left = generator.apply(&goal, Displacement::new(0, -1)).unwrap();
        let up = generator.apply(&goal, Displacement::new(-1, 0)).unwrap();
        assert_eq!(move_direction(&goal, &left).map(Direction::label), Some("right"));
        assert_eq!(move_direction(&left, &goal).map(Direction::label), Some("left"));
        assert_eq!(move_direction(&goal, &up).map(Direction::label), Some("down"));
        assert_eq!(move_direction(&up, &goal).map(Direction::short_label), Some('u'));
        assert_eq!(move_direction(&goal, &goal), None);
        assert_eq!(move_direction(&left, &up), None);
    }
}
