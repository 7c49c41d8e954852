//! Game configuration.
//!
//! A `GameConfig` describes the table before a game starts:
//! - how many seats, and their display names
//! - which seat (if any) is driven by a human through the input bridge
//! - which seat (if any) plays as a score minimizer
//! - the inter-turn pacing delay (also adjustable while the game runs)
//! - an optional seed for reproducible shuffles and seating

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::PlayerId;

/// Default pause between turns, in milliseconds.
pub const DEFAULT_PACING_DELAY_MS: u64 = 900;

/// Which seat plays as a score minimizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimizerSeat {
    /// Every AI plays the regular heuristic.
    None,
    /// One seat, other than the last, is picked at random when the game is built.
    #[default]
    Random,
    /// A fixed seat.
    Seat(PlayerId),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-255).
    pub player_count: usize,

    /// Pause before every turn, in milliseconds.
    pub pacing_delay_ms: u64,

    /// Root seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Display names by seat. Missing entries fall back to `Player N`.
    pub names: Vec<String>,

    /// Seat driven by the human input bridge.
    pub human: Option<PlayerId>,

    pub minimizer: MinimizerSeat,
}

impl GameConfig {
    /// Create a configuration with defaults for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            seed: None,
            names: Vec::new(),
            human: None,
            minimizer: MinimizerSeat::default(),
        }
    }

    #[must_use]
    pub fn with_pacing_delay_ms(mut self, delay_ms: u64) -> Self {
        self.pacing_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_human(mut self, seat: PlayerId) -> Self {
        self.human = Some(seat);
        self
    }

    #[must_use]
    pub fn with_minimizer(mut self, minimizer: MinimizerSeat) -> Self {
        self.minimizer = minimizer;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name_of(&self, seat: PlayerId) -> String {
        self.names
            .get(seat.index())
            .cloned()
            .unwrap_or_else(|| seat.to_string())
    }

    /// Check the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(2..=255).contains(&self.player_count) {
            return Err(GameError::PlayerCount {
                requested: self.player_count,
            });
        }

        let seats = [
            self.human,
            match self.minimizer {
                MinimizerSeat::Seat(seat) => Some(seat),
                _ => None,
            },
        ];
        for seat in seats.into_iter().flatten() {
            if seat.index() >= self.player_count {
                return Err(GameError::SeatOutOfRange {
                    seat,
                    player_count: self.player_count,
                });
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
