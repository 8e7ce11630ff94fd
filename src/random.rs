//! Uniform random source used by card generation and number calling.
//!
//! Every `rand::Rng` is a [`RandomSource`], so production code passes a
//! seeded `SmallRng`. Tests that need exact draws use [`ScriptedSource`].

use alloc::vec::Vec;
use rand::Rng;

/// Capability to pick a uniformly distributed integer.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn uniform(&mut self, low: u8, high: u8) -> u8;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: u8, high: u8) -> u8 {
        self.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when it runs out.
///
/// Each value is taken as an offset into the requested range, so a script of
/// `[3]` answers `uniform(1, 15)` with `4` and `uniform(0, 4)` with `3`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Script that makes the number pool draw `numbers` in order, provided
    /// none of them was called before.
    pub fn drawing(numbers: &[u8]) -> Self {
        let mut values = Vec::with_capacity(numbers.len() * 2);
        for &n in numbers {
            let offset = n.saturating_sub(1);
            values.push(offset / crate::config::NUMBERS_PER_LETTER);
            values.push(offset % crate::config::NUMBERS_PER_LETTER);
        }
        Self::new(values)
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: u8, high: u8) -> u8 {
        if self.values.is_empty() {
            return low;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        let span = u16::from(high - low) + 1;
        low + (u16::from(raw) % span) as u8
    }
}
