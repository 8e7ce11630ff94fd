//! Notifications a session emits for whatever renders it.

use alloc::string::String;

use crate::card::Card;
use crate::letter::Call;
use crate::win::Line;

/// Notification emitted by the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A fresh card was dealt.
    CardGenerated(Card),
    /// A number was drawn; `called_count` includes it.
    NumberCalled { call: Call, called_count: usize },
    /// A card position became marked.
    CellMarked(usize),
    /// A line was completed. Emitted once per game.
    Won(Line),
    /// All numbers were called without a win. Emitted once per game.
    Exhausted,
    /// Status text for the player.
    Message(String),
}

/// Interface implemented by front-ends that render a session.
pub trait GameObserver {
    fn on_card_generated(&mut self, _card: &Card) {}

    fn on_number_called(&mut self, _call: Call, _called_count: usize) {}

    fn on_cell_marked(&mut self, _position: usize) {}

    fn on_win(&mut self, _line: &Line) {}

    fn on_exhausted(&mut self) {}

    fn on_message(&mut self, _text: &str) {}
}

impl GameEvent {
    /// Forward this event to the matching observer method.
    pub fn notify<O: GameObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            GameEvent::CardGenerated(card) => observer.on_card_generated(card),
            GameEvent::NumberCalled { call, called_count } => {
                observer.on_number_called(*call, *called_count)
            }
            GameEvent::CellMarked(position) => observer.on_cell_marked(*position),
            GameEvent::Won(line) => observer.on_win(line),
            GameEvent::Exhausted => observer.on_exhausted(),
            GameEvent::Message(text) => observer.on_message(text),
        }
    }
}
