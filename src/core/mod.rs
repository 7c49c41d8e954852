//! Core types: cards, seats, RNG, configuration, errors.
//!
//! Everything here is independent of the turn loop and can be used on its own.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{full_deck, Card, Rank, Suit, DECK_SIZE};
pub use config::{GameConfig, MinimizerSeat, DEFAULT_PACING_DELAY_MS};
pub use error::{check_hand_size, GameError, MAX_HAND_SIZE, MIN_HAND_SIZE};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
