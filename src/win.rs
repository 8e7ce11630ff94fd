//! Winning lines and win detection.

use core::fmt;

use crate::config::{GRID_SIZE, LINE_COUNT};
use crate::marks::{CardBoard, MarkState};

/// Which of the twelve lines this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Five card positions that win when all are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub kind: LineKind,
    pub positions: [u8; GRID_SIZE],
}

impl Line {
    /// The line as a card mask.
    pub fn mask(&self) -> CardBoard {
        let mut raw = 0u32;
        for p in self.positions {
            raw |= 1 << p;
        }
        CardBoard::from_raw(raw)
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.iter().any(|&p| p as usize == position)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(r) => write!(f, "row {}", r + 1),
            LineKind::Column(c) => write!(f, "column {}", c + 1),
            LineKind::Diagonal => write!(f, "diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Rows, then columns, then the two diagonals.
pub const fn lines_of() -> [Line; LINE_COUNT] {
    let blank = Line {
        kind: LineKind::Diagonal,
        positions: [0; GRID_SIZE],
    };
    let mut lines = [blank; LINE_COUNT];
    let n = GRID_SIZE;
    let mut i = 0;
    while i < n {
        let mut row = [0u8; GRID_SIZE];
        let mut col = [0u8; GRID_SIZE];
        let mut j = 0;
        while j < n {
            row[j] = (i * n + j) as u8;
            col[j] = (j * n + i) as u8;
            j += 1;
        }
        lines[i] = Line {
            kind: LineKind::Row(i as u8),
            positions: row,
        };
        lines[n + i] = Line {
            kind: LineKind::Column(i as u8),
            positions: col,
        };
        i += 1;
    }
    let mut diag = [0u8; GRID_SIZE];
    let mut anti = [0u8; GRID_SIZE];
    let mut k = 0;
    while k < n {
        diag[k] = (k * n + k) as u8;
        anti[k] = (k * n + (n - 1 - k)) as u8;
        k += 1;
    }
    lines[2 * n] = Line {
        kind: LineKind::Diagonal,
        positions: diag,
    };
    lines[2 * n + 1] = Line {
        kind: LineKind::AntiDiagonal,
        positions: anti,
    };
    lines
}

/// All winning lines of the card, in checking order.
pub const LINES: [Line; LINE_COUNT] = lines_of();

/// First fully marked line, if any. When one mark completes several lines at
/// once only the earliest in [`LINES`] order is reported.
pub fn check_win(marks: &MarkState) -> Option<Line> {
    completed_lines(marks).next()
}

/// Every fully marked line, in [`LINES`] order.
pub fn completed_lines(marks: &MarkState) -> impl Iterator<Item = Line> {
    let board = marks.as_board();
    LINES.into_iter().filter(move |line| board.contains_all(line.mask()))
}
