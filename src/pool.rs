//! The pool of bingo balls: which of 1..=75 have been called, and drawing
//! the next one.

use alloc::vec::Vec;

use crate::common::GameError;
use crate::config::{DRAW_ATTEMPT_LIMIT, LETTERS, MAX_NUMBER};
use crate::letter::{Call, Letter};
use crate::random::RandomSource;

/// Called numbers of the current session. Bit `n - 1` is set once `n` is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPool {
    called: u128,
    history: Vec<Call>,
}

impl NumberPool {
    /// A pool with nothing called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw an uncalled number.
    ///
    /// A letter drum is picked uniformly first, then a number from that drum,
    /// and the whole pick is retried until it lands on an uncalled number.
    /// Numbers in drums that are nearly empty are therefore more likely than
    /// a flat pick over 1..=75 would make them.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Call, GameError> {
        if self.is_exhausted() {
            return Err(GameError::PoolExhausted);
        }
        let mut picked = None;
        for _ in 0..DRAW_ATTEMPT_LIMIT {
            let letter = LETTERS[rng.uniform(0, LETTERS.len() as u8 - 1) as usize];
            let number = rng.uniform(letter.min(), letter.max());
            if !self.has(number) {
                picked = Some(Call { letter, number });
                break;
            }
        }
        let call = match picked {
            Some(call) => call,
            None => self.pick_remaining(rng)?,
        };
        self.record(call.number);
        self.history.push(call);
        Ok(call)
    }

    fn pick_remaining<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Call, GameError> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Err(GameError::PoolExhausted);
        }
        let k = rng.uniform(0, (remaining - 1) as u8) as usize;
        let number = (1..=MAX_NUMBER)
            .filter(|n| !self.has(*n))
            .nth(k)
            .ok_or(GameError::PoolExhausted)?;
        let letter = Letter::of(number).ok_or(GameError::PoolExhausted)?;
        Ok(Call { letter, number })
    }

    fn record(&mut self, number: u8) {
        self.called |= 1u128 << (number - 1);
    }

    /// Whether `number` has been called this session.
    pub fn has(&self, number: u8) -> bool {
        number != 0 && number <= MAX_NUMBER && self.called & (1u128 << (number - 1)) != 0
    }

    pub fn called_count(&self) -> usize {
        self.called.count_ones() as usize
    }

    pub fn remaining(&self) -> usize {
        MAX_NUMBER as usize - self.called_count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Called numbers in ascending order.
    pub fn called(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=MAX_NUMBER).filter(move |n| self.has(*n))
    }

    /// Calls in the order they were drawn.
    pub fn history(&self) -> &[Call] {
        &self.history
    }

    pub fn last(&self) -> Option<Call> {
        self.history.last().copied()
    }

    pub fn reset(&mut self) {
        self.called = 0;
        self.history.clear();
    }
}
