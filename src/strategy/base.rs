//! The everyday policy: keep attack cards in reserve.

use super::Strategy;
use crate::core::{Card, Rank};

/// Plays ordinary matching cards and Jacks; holds Aces, Twos and Tens back.
///
/// Under a pending penalty only a Two validates.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseStrategy;

impl Strategy for BaseStrategy {
    fn name(&self) -> &'static str {
        "base"
    }

    fn validate(&self, card: Card, top: Card, penalty_active: bool) -> bool {
        if penalty_active {
            return card.rank() == Rank::Two;
        }
        if card.rank() == Rank::Jack {
            return true;
        }
        if card.is_attack() {
            return false;
        }
        card.matches(top)
    }
}
