//! Common types for Bingo: the error enum every rejected action reports.

use crate::bitboard::BitBoardError;

/// Reasons an operation on the game was rejected. None of them leave the
/// session in a changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A cell was selected before the first number was called.
    NotStarted,
    /// The session already has a winning line.
    AlreadyWon,
    /// Every number was called without a win.
    AlreadyExhausted,
    /// The number at the selected cell has not been called yet.
    NumberNotCalled(u8),
    /// The selected position is already marked.
    AlreadyMarked(usize),
    /// All 75 numbers have been drawn.
    PoolExhausted,
    /// Position outside the 25 card cells.
    InvalidPosition(usize),
    /// Card columns out of range or holding duplicates.
    InvalidCard,
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "Start a new game to play!"),
            GameError::AlreadyWon => write!(f, "Bingo! Start a new game."),
            GameError::AlreadyExhausted => write!(f, "All numbers called! No Bingo. Game Over!"),
            GameError::NumberNotCalled(n) => write!(f, "Number {} has not been called yet!", n),
            GameError::AlreadyMarked(_) => write!(f, "That number is already marked!"),
            GameError::PoolExhausted => write!(f, "All numbers have already been called"),
            GameError::InvalidPosition(p) => write!(f, "Cell {} is not on the card", p),
            GameError::InvalidCard => write!(f, "Card columns are out of range or repeat a number"),
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
