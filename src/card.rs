//! The 5×5 player card and its random generation.

use crate::common::GameError;
use crate::config::{CELL_COUNT, COLUMN_ATTEMPT_LIMIT, FREE_CELL, GRID_SIZE, NUMBERS_PER_LETTER};
use crate::letter::Letter;
use crate::random::RandomSource;

/// Content of a single card position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Number(u8),
    /// The center square; never called, always marked.
    Free,
}

impl Cell {
    pub fn number(self) -> Option<u8> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Free => None,
        }
    }
}

/// A generated card, stored row-major. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CardCells")
)]
pub struct Card {
    cells: [Cell; CELL_COUNT],
}

/// Unchecked wire form of a card; decoding goes through `Card::from_cells`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct CardCells {
    cells: [Cell; CELL_COUNT],
}

#[cfg(feature = "std")]
impl TryFrom<CardCells> for Card {
    type Error = GameError;

    fn try_from(raw: CardCells) -> Result<Self, Self::Error> {
        Card::from_cells(raw.cells)
    }
}

/// Pick five distinct numbers from `letter`'s range, sorted ascending.
pub fn generate_column<R: RandomSource + ?Sized>(rng: &mut R, letter: Letter) -> [u8; GRID_SIZE] {
    let mut chosen = [0u8; GRID_SIZE];
    let mut len = 0;
    let mut attempts = 0;
    while len < GRID_SIZE && attempts < COLUMN_ATTEMPT_LIMIT {
        attempts += 1;
        let n = rng.uniform(letter.min(), letter.max());
        if !chosen[..len].contains(&n) {
            chosen[len] = n;
            len += 1;
        }
    }
    // pathological source: take the k-th unused value instead
    while len < GRID_SIZE {
        let unused = NUMBERS_PER_LETTER - len as u8;
        let mut k = rng.uniform(0, unused - 1);
        for n in letter.range() {
            if chosen[..len].contains(&n) {
                continue;
            }
            if k == 0 {
                chosen[len] = n;
                len += 1;
                break;
            }
            k -= 1;
        }
    }
    chosen.sort_unstable();
    chosen
}

/// Generate a full card: one column per letter, free square in the center.
pub fn generate_card<R: RandomSource + ?Sized>(rng: &mut R) -> Card {
    let columns = Letter::ALL.map(|letter| generate_column(&mut *rng, letter));
    Card::assemble(&columns)
}

impl Card {
    fn assemble(columns: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let cells = core::array::from_fn(|pos| {
            if pos == FREE_CELL {
                Cell::Free
            } else {
                Cell::Number(columns[pos % GRID_SIZE][pos / GRID_SIZE])
            }
        });
        Card { cells }
    }

    /// Build a card from explicit columns, B first. Each column is read top
    /// to bottom; the value under the free square is ignored.
    pub fn from_columns(columns: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GameError> {
        for (col, values) in columns.iter().enumerate() {
            let letter = Letter::from_column(col).ok_or(GameError::InvalidCard)?;
            for (row, &n) in values.iter().enumerate() {
                if row * GRID_SIZE + col == FREE_CELL {
                    continue;
                }
                if !letter.range().contains(&n) {
                    return Err(GameError::InvalidCard);
                }
                let repeated = values
                    .iter()
                    .enumerate()
                    .any(|(other, &m)| other != row && other * GRID_SIZE + col != FREE_CELL && m == n);
                if repeated {
                    return Err(GameError::InvalidCard);
                }
            }
        }
        Ok(Self::assemble(&columns))
    }

    /// Rebuild a card from row-major cells. Only the center may be free and
    /// the numbers must satisfy the same rules as [`Card::from_columns`].
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, GameError> {
        let mut columns = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (pos, cell) in cells.iter().enumerate() {
            match (*cell, pos == FREE_CELL) {
                (Cell::Free, true) => {}
                (Cell::Number(n), false) => columns[pos % GRID_SIZE][pos / GRID_SIZE] = n,
                _ => return Err(GameError::InvalidCard),
            }
        }
        Self::from_columns(columns)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `position` (row-major, 0..25).
    pub fn cell(&self, position: usize) -> Result<Cell, GameError> {
        self.cells
            .get(position)
            .copied()
            .ok_or(GameError::InvalidPosition(position))
    }

    /// Number printed at `position`; `None` for the free square.
    pub fn number_at(&self, position: usize) -> Result<Option<u8>, GameError> {
        Ok(self.cell(position)?.number())
    }

    /// Position holding `number`. Column ranges are disjoint, so there is at
    /// most one.
    pub fn position_of(&self, number: u8) -> Option<usize> {
        self.cells.iter().position(|c| *c == Cell::Number(number))
    }

    /// The five cells under `letter`, top to bottom.
    pub fn column(&self, letter: Letter) -> [Cell; GRID_SIZE] {
        core::array::from_fn(|row| self.cells[row * GRID_SIZE + letter.column()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn column_values_distinct_sorted_in_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        for letter in Letter::ALL {
            let col = generate_column(&mut rng, letter);
            assert!(col.windows(2).all(|w| w[0] < w[1]));
            assert!(col.iter().all(|n| letter.range().contains(n)));
        }
    }

    #[test]
    fn stuck_source_still_fills_column() {
        // always answers the range minimum
        let mut src = ScriptedSource::new(alloc::vec![0]);
        let col = generate_column(&mut src, Letter::N);
        assert_eq!(col, [31, 32, 33, 34, 35]);
    }

    #[test]
    fn free_cell_in_center() {
        let mut rng = SmallRng::seed_from_u64(3);
        let card = generate_card(&mut rng);
        assert_eq!(card.cell(FREE_CELL).unwrap(), Cell::Free);
        assert_eq!(card.cells().iter().filter(|c| **c == Cell::Free).count(), 1);
    }

    #[test]
    fn from_columns_validates() {
        let good = [
            [1, 2, 3, 4, 5],
            [16, 17, 18, 19, 20],
            [31, 32, 0, 34, 35],
            [46, 47, 48, 49, 50],
            [61, 62, 63, 64, 65],
        ];
        let card = Card::from_columns(good).unwrap();
        assert_eq!(card.number_at(0).unwrap(), Some(1));
        assert_eq!(card.number_at(1).unwrap(), Some(16));
        assert_eq!(card.number_at(5).unwrap(), Some(2));
        assert_eq!(card.number_at(FREE_CELL).unwrap(), None);
        assert_eq!(card.position_of(65), Some(24));
        assert_eq!(card.position_of(33), None);

        let mut dup = good;
        dup[0][1] = 1;
        assert_eq!(Card::from_columns(dup), Err(GameError::InvalidCard));

        let mut out_of_range = good;
        out_of_range[4][0] = 60;
        assert_eq!(Card::from_columns(out_of_range), Err(GameError::InvalidCard));
    }

    #[test]
    fn from_cells_checks_layout() {
        let mut rng = SmallRng::seed_from_u64(5);
        let card = generate_card(&mut rng);
        assert_eq!(Card::from_cells(*card.cells()), Ok(card));

        let mut free_in_corner = *card.cells();
        free_in_corner[0] = Cell::Free;
        assert_eq!(Card::from_cells(free_in_corner), Err(GameError::InvalidCard));

        let mut numbered_center = *card.cells();
        numbered_center[FREE_CELL] = Cell::Number(33);
        assert_eq!(Card::from_cells(numbered_center), Err(GameError::InvalidCard));

        let mut repeated = *card.cells();
        repeated[5] = repeated[0];
        assert_eq!(Card::from_cells(repeated), Err(GameError::InvalidCard));
    }

    #[test]
    fn invalid_position() {
        let mut rng = SmallRng::seed_from_u64(3);
        let card = generate_card(&mut rng);
        assert_eq!(card.cell(25), Err(GameError::InvalidPosition(25)));
    }
}
