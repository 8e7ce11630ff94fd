//! The game lifecycle: dealing, calling, marking and win checks for one
//! player's card.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{generate_card, Card};
use crate::common::GameError;
use crate::letter::Call;
use crate::marks::{MarkResult, MarkState};
use crate::observer::{GameEvent, GameObserver};
use crate::pool::NumberPool;
use crate::random::RandomSource;
use crate::win::{check_win, Line};

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Card dealt, nothing called yet.
    Idle,
    Active,
    Won,
    /// Every number called without a win.
    Exhausted,
}

impl GameStatus {
    /// `Won` and `Exhausted` accept nothing but a new game.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Exhausted)
    }
}

/// Who marks called numbers on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkingMode {
    /// Every called number on the card is marked as soon as it is drawn.
    #[default]
    Auto,
    /// The player confirms each match with [`GameSession::mark_cell`].
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub marking: MarkingMode,
}

/// Result of a successful call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallReport {
    pub call: Call,
    /// Card position auto-marked by this call.
    pub marked: Option<usize>,
    /// Status after the call.
    pub status: GameStatus,
}

/// Read-only view of a session for front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub card: Card,
    pub history: Vec<Call>,
    pub marked: Vec<usize>,
    pub winning_line: Option<Line>,
}

/// One player's game: card, called numbers, marks and status.
///
/// Operations never panic on bad input. Rejected actions return a
/// [`GameError`] and queue a status message, leaving the state untouched.
/// Notifications accumulate until [`drain_events`](Self::drain_events) or
/// [`dispatch`](Self::dispatch) is called.
pub struct GameSession<R: RandomSource> {
    rng: R,
    config: SessionConfig,
    card: Card,
    pool: NumberPool,
    marks: MarkState,
    status: GameStatus,
    winning_line: Option<Line>,
    events: Vec<GameEvent>,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session on a freshly generated card.
    pub fn new(mut rng: R, config: SessionConfig) -> Self {
        let card = generate_card(&mut rng);
        Self::with_card(rng, config, card)
    }

    /// Start a session on a given card.
    pub fn with_card(rng: R, config: SessionConfig, card: Card) -> Self {
        let mut session = Self {
            rng,
            config,
            card,
            pool: NumberPool::new(),
            marks: MarkState::new(),
            status: GameStatus::Idle,
            winning_line: None,
            events: Vec::new(),
        };
        session.deal(card);
        session
    }

    /// Discard the current game and deal a new card, whatever the status.
    pub fn new_game(&mut self) {
        let card = generate_card(&mut self.rng);
        self.deal(card);
    }

    fn deal(&mut self, card: Card) {
        self.card = card;
        self.pool.reset();
        self.marks.reset();
        self.status = GameStatus::Idle;
        self.winning_line = None;
        log::info!("new card dealt");
        self.events.push(GameEvent::CardGenerated(card));
        self.message("New game started! Good luck!");
    }

    /// Draw the next number and, in auto mode, mark it on the card.
    pub fn call_next(&mut self) -> Result<CallReport, GameError> {
        match self.status {
            GameStatus::Won => return self.reject(GameError::AlreadyWon),
            GameStatus::Exhausted => return self.reject(GameError::AlreadyExhausted),
            GameStatus::Idle => {
                self.status = GameStatus::Active;
                log::info!("game started");
                self.message("Game started! Good luck!");
            }
            GameStatus::Active => {}
        }

        let call = match self.pool.draw(&mut self.rng) {
            Ok(call) => call,
            Err(GameError::PoolExhausted) => {
                self.finish_exhausted();
                return Err(GameError::PoolExhausted);
            }
            Err(err) => return self.reject(err),
        };
        let called_count = self.pool.called_count();
        log::debug!("called {} ({} so far)", call, called_count);
        self.events.push(GameEvent::NumberCalled { call, called_count });

        let mut marked = None;
        if self.config.marking == MarkingMode::Auto {
            if let Some(position) = self.card.position_of(call.number) {
                if self.marks.mark(position)? == MarkResult::Marked {
                    marked = Some(position);
                    self.events.push(GameEvent::CellMarked(position));
                }
            }
        }
        if marked.is_some() {
            self.message(&format!("Called: {}. Marked on your card!", call));
        } else {
            self.message(&format!("Called: {}", call));
        }

        self.check_for_win();
        // in manual mode the last number can still be marked; exhaustion is
        // reported by the next call instead
        if self.status == GameStatus::Active
            && self.pool.is_exhausted()
            && self.config.marking == MarkingMode::Auto
        {
            self.finish_exhausted();
        }

        Ok(CallReport {
            call,
            marked,
            status: self.status,
        })
    }

    /// Player confirms the number at `position` (row-major, 0..25).
    pub fn mark_cell(&mut self, position: usize) -> Result<(), GameError> {
        let number = match self.card.number_at(position) {
            Ok(number) => number,
            Err(err) => return self.reject(err),
        };
        match self.status {
            GameStatus::Idle => return self.reject(GameError::NotStarted),
            GameStatus::Won => return self.reject(GameError::AlreadyWon),
            GameStatus::Exhausted => return self.reject(GameError::AlreadyExhausted),
            GameStatus::Active => {}
        }
        // the free square has no number and is always marked
        let Some(number) = number else {
            return self.reject(GameError::AlreadyMarked(position));
        };
        if !self.pool.has(number) {
            return self.reject(GameError::NumberNotCalled(number));
        }
        if self.marks.mark(position)? == MarkResult::AlreadyMarked {
            return self.reject(GameError::AlreadyMarked(position));
        }
        log::debug!("player marked {} at {}", number, position);
        self.events.push(GameEvent::CellMarked(position));
        self.message(&format!("Marked: {}!", number));
        self.check_for_win();
        Ok(())
    }

    fn finish_exhausted(&mut self) {
        self.status = GameStatus::Exhausted;
        log::info!("all numbers called without a win");
        self.events.push(GameEvent::Exhausted);
        self.message("All numbers called! No Bingo. Game Over!");
    }

    fn check_for_win(&mut self) {
        if let Some(line) = check_win(&self.marks) {
            self.status = GameStatus::Won;
            self.winning_line = Some(line);
            log::info!("bingo on {}", line.kind);
            self.events.push(GameEvent::Won(line));
            self.message("BINGO! You won!");
        }
    }

    fn reject<T>(&mut self, err: GameError) -> Result<T, GameError> {
        log::debug!("rejected: {:?}", err);
        self.message(&err.to_string());
        Err(err)
    }

    fn message(&mut self, text: &str) {
        self.events.push(GameEvent::Message(String::from(text)));
    }

    /// Take all notifications queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Forward queued notifications to `observer`, oldest first.
    pub fn dispatch<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.drain_events() {
            event.notify(observer);
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn last_call(&self) -> Option<Call> {
        self.pool.last()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            card: self.card,
            history: self.pool.history().to_vec(),
            marked: self.marks.positions().collect(),
            winning_line: self.winning_line,
        }
    }
}
