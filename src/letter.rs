//! Bingo column letters and their fixed number ranges.

use core::fmt;
use core::ops::RangeInclusive;

use crate::config::{GRID_SIZE, MAX_NUMBER, NUMBERS_PER_LETTER};

/// One of the five card columns, each owning fifteen consecutive numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// Letters in column order.
    pub const ALL: [Letter; GRID_SIZE] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

    /// Zero-based card column of this letter.
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Letter heading column `col`, if it is on the card.
    pub fn from_column(col: usize) -> Option<Letter> {
        Self::ALL.get(col).copied()
    }

    /// Smallest number in this letter's range.
    pub const fn min(self) -> u8 {
        self as u8 * NUMBERS_PER_LETTER + 1
    }

    /// Largest number in this letter's range.
    pub const fn max(self) -> u8 {
        (self as u8 + 1) * NUMBERS_PER_LETTER
    }

    /// Inclusive range of numbers printed under this letter.
    pub fn range(self) -> RangeInclusive<u8> {
        self.min()..=self.max()
    }

    /// Letter whose range contains `number`.
    pub fn of(number: u8) -> Option<Letter> {
        if number == 0 || number > MAX_NUMBER {
            return None;
        }
        Self::from_column(((number - 1) / NUMBERS_PER_LETTER) as usize)
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::B => 'B',
            Letter::I => 'I',
            Letter::N => 'N',
            Letter::G => 'G',
            Letter::O => 'O',
        }
    }

    /// Parse a letter from its (case-insensitive) character.
    pub fn from_char(ch: char) -> Option<Letter> {
        match ch.to_ascii_uppercase() {
            'B' => Some(Letter::B),
            'I' => Some(Letter::I),
            'N' => Some(Letter::N),
            'G' => Some(Letter::G),
            'O' => Some(Letter::O),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A called ball: the letter drum it came from and its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub letter: Letter,
    pub number: u8,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letter, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_contiguous_and_fifteen_wide() {
        let mut expected_min = 1;
        for letter in Letter::ALL {
            assert_eq!(letter.min(), expected_min);
            assert_eq!(letter.max() - letter.min() + 1, NUMBERS_PER_LETTER);
            expected_min = letter.max() + 1;
        }
        assert_eq!(Letter::O.max(), MAX_NUMBER);
    }

    #[test]
    fn letter_of_number() {
        assert_eq!(Letter::of(0), None);
        assert_eq!(Letter::of(1), Some(Letter::B));
        assert_eq!(Letter::of(15), Some(Letter::B));
        assert_eq!(Letter::of(16), Some(Letter::I));
        assert_eq!(Letter::of(45), Some(Letter::N));
        assert_eq!(Letter::of(46), Some(Letter::G));
        assert_eq!(Letter::of(75), Some(Letter::O));
        assert_eq!(Letter::of(76), None);
    }

    #[test]
    fn call_display() {
        let call = Call {
            letter: Letter::G,
            number: 52,
        };
        assert_eq!(std::format!("{}", call), "G-52");
    }
}
