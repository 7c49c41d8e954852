//! The offensive policy: spend attack cards first.

use super::Strategy;
use crate::core::{Card, Rank};

/// Only ever plays attack ranks (Ace, Two, Ten, Jack).
///
/// Under a pending penalty only a Two validates; otherwise a Jack always
/// does and the rest must match the top card's suit or rank.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttackStrategy;

impl Strategy for AttackStrategy {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn validate(&self, card: Card, top: Card, penalty_active: bool) -> bool {
        if !card.is_attack() {
            return false;
        }
        if penalty_active {
            return card.rank() == Rank::Two;
        }
        if card.rank() == Rank::Jack {
            return true;
        }
        card.matches(top)
    }
}
