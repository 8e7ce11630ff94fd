use crate::letter::Letter;

pub const GRID_SIZE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Center of the card, row 2 column 2.
pub const FREE_CELL: usize = (GRID_SIZE / 2) * GRID_SIZE + GRID_SIZE / 2;
pub const NUMBERS_PER_LETTER: u8 = 15;
pub const MAX_NUMBER: u8 = NUMBERS_PER_LETTER * GRID_SIZE as u8;
pub const LETTERS: [Letter; GRID_SIZE] = Letter::ALL;
/// Number of winning lines on the card: rows, columns and both diagonals.
pub const LINE_COUNT: usize = GRID_SIZE * 2 + 2;

/// Random picks tried per column value before sampling from the unused values.
pub const COLUMN_ATTEMPT_LIMIT: usize = 1_000;
/// Letter-then-number picks tried per draw before sampling from the uncalled numbers.
pub const DRAW_ATTEMPT_LIMIT: usize = 10_000;
