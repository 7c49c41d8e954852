//! Pile management: dealing, drawing, reshuffling, and play legality.
//!
//! ## Key Types
//!
//! - `GameBoard`: draw pile, deposit pile, pending draw penalty
//! - `DrawOutcome`: what a single draw did (drawn, recycled, exhausted)
//! - `is_playable`: the legality rule shared by the engine and strategies

pub mod piles;

pub use piles::{is_playable, DrawOutcome, GameBoard};
