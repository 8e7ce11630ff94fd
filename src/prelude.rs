//! Commonly used types and utilities for ease of import.

pub use crate::{
    Call, Card, Cell, GameError, GameEvent, GameObserver, GameSession, GameStatus, Letter, Line,
    MarkingMode, RandomSource, SessionConfig,
};

#[cfg(feature = "std")]
pub use crate::{print_card, CliObserver};
