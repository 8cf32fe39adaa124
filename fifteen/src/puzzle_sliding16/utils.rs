pub const DENIED: u8 = u8::MAX;

/// Number of bits needed to store either tile number or its position (index of the board cell).
pub const BITS_PER_CELL: u8 = 4;

/// 0..01..1 mask with BITS_PER_CELL bits set.
pub const BITS_PER_CELL_MASK64: u64 = (1u64<<BITS_PER_CELL)-1;

/// Number of rows and columns of the board.
pub const SIDE: u8 = 4;

/// Number of cells in the board.
pub const BOARD_SIZE: usize = (SIDE * SIDE) as usize;

/// 0001 repeated in every cell, used to reduce each cell to a single bit.
pub const LOWEST_BIT_OF_EACH_CELL: u64 = 0x1111_1111_1111_1111;
