//! Turn loop, pacing, and end-of-game standings.
//!
//! ## Key Types
//!
//! - `Game`: owns the table and drives turns
//! - `PacingClock`: the adjustable pause between turns
//! - `GameOutcome` / `Standing`: how a run ended

pub mod game;
pub mod pacing;
pub mod score;

pub use game::{Game, GameOutcome, GamePhase, GameStatus, TurnOutcome};
pub use pacing::PacingClock;
pub use score::{rank_players, score_table, Standing};
