#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod card;
mod common;
mod config;
mod letter;
mod marks;
mod observer;
mod pool;
mod random;
mod session;
mod win;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use card::*;
pub use common::*;
pub use config::*;
pub use letter::*;
pub use marks::*;
pub use observer::*;
pub use pool::*;
pub use random::*;
pub use session::*;
pub use win::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
