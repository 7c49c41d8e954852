//! Card-selection policies for AI players.
//!
//! A `Strategy` judges single cards (`validate`) and picks one from a hand
//! (`choose`). Players hold a `StrategyChain`: an ordered list of strategies
//! per `PlayerMode`, consulted in order until one returns a card.
//!
//! ## Selection rule
//!
//! The default `choose` scans the hand front to back and keeps overwriting
//! its candidate with every card that validates, so the **last** valid card
//! in hand order wins. On the opening play (empty deposit pile) the first
//! card in hand is returned.

pub mod attack;
pub mod base;
pub mod chain;

pub use attack::AttackStrategy;
pub use base::BaseStrategy;
pub use chain::StrategyChain;

use crate::board::GameBoard;
use crate::core::Card;

/// A card-selection policy.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether this policy accepts `card` on top of `top`.
    fn validate(&self, card: Card, top: Card, penalty_active: bool) -> bool;

    /// Pick a card from `hand`, or `None` to pass to the next strategy.
    fn choose(&self, board: &GameBoard, hand: &[Card]) -> Option<Card> {
        let Some(top) = board.top() else {
            return hand.first().copied();
        };
        let penalty_active = board.pending_draw() > 0;

        hand.iter()
            .copied()
            .filter(|&card| self.validate(card, top, penalty_active))
            .last()
    }
}
