//! Engine error type.

use thiserror::Error;

use super::card::Card;
use super::player::PlayerId;

/// Smallest legal starting hand.
pub const MIN_HAND_SIZE: usize = 5;

/// Largest legal starting hand.
pub const MAX_HAND_SIZE: usize = 8;

/// Errors raised by the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Starting hand size outside `MIN_HAND_SIZE..=MAX_HAND_SIZE`.
    #[error("hand size {requested} is out of range (5..=8)")]
    HandSizeOutOfRange { requested: usize },

    /// A ring needs at least two seats to advance turns.
    #[error("player count {requested} is out of range (2..=255)")]
    PlayerCount { requested: usize },

    /// A configured seat (human or minimizer) is not at the table.
    #[error("{seat} is not seated at a {player_count}-player table")]
    SeatOutOfRange { seat: PlayerId, player_count: usize },

    /// A suspension point was cancelled (token fired or bridge reset).
    #[error("operation cancelled")]
    Cancelled,

    #[error("cannot {operation} while the game is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("expected {expected} staged hands, got {actual}")]
    StagedHands { expected: usize, actual: usize },

    /// A play referenced a card the player does not hold.
    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },
}

impl GameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GameError::Cancelled)
    }
}

/// Validate a starting hand size.
pub fn check_hand_size(requested: usize) -> Result<(), GameError> {
    if (MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&requested) {
        Ok(())
    } else {
        Err(GameError::HandSizeOutOfRange { requested })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hand_size() {
        assert!(check_hand_size(5).is_ok());
        assert!(check_hand_size(8).is_ok());
        assert_eq!(
            check_hand_size(4),
            Err(GameError::HandSizeOutOfRange { requested: 4 })
        );
        assert!(check_hand_size(9).is_err());
    }

    #[test]
    fn test_messages() {
        let err = GameError::HandSizeOutOfRange { requested: 9 };
        assert_eq!(err.to_string(), "hand size 9 is out of range (5..=8)");
        assert!(GameError::Cancelled.is_cancelled());
    }
}
