//! Which card positions the player has marked.

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{FREE_CELL, GRID_SIZE};

/// Bitboard covering the 25 card positions.
pub type CardBoard = BitBoard<u32, GRID_SIZE>;

/// Outcome of a mark request that was within the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkResult {
    /// The position was newly marked.
    Marked,
    /// The position was already marked; nothing changed.
    AlreadyMarked,
}

/// Marked positions. The free square is marked from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkState {
    marked: CardBoard,
}

impl MarkState {
    pub fn new() -> Self {
        Self {
            marked: CardBoard::from_raw(1 << FREE_CELL),
        }
    }

    /// Mark `position`. Marking twice is a no-op reported as `AlreadyMarked`.
    pub fn mark(&mut self, position: usize) -> Result<MarkResult, GameError> {
        if self.is_marked_checked(position)? {
            return Ok(MarkResult::AlreadyMarked);
        }
        self.marked.set_index(position)?;
        Ok(MarkResult::Marked)
    }

    fn is_marked_checked(&self, position: usize) -> Result<bool, GameError> {
        self.marked
            .get_index(position)
            .map_err(|_| GameError::InvalidPosition(position))
    }

    /// Whether `position` is marked; out-of-card positions never are.
    pub fn is_marked(&self, position: usize) -> bool {
        self.marked.get_index(position).unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.marked.count_ones()
    }

    /// Marked positions ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter_set_bits()
    }

    pub fn as_board(&self) -> CardBoard {
        self.marked
    }

    /// Back to only the free square.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MarkState {
    fn default() -> Self {
        Self::new()
    }
}
