//! Ordered strategy lists, one per player mode.

use std::sync::Arc;

use smallvec::{smallvec, SmallVec};
use tracing::trace;

use super::{AttackStrategy, BaseStrategy, Strategy};
use crate::board::GameBoard;
use crate::core::Card;
use crate::players::PlayerMode;

type Chain = SmallVec<[Arc<dyn Strategy>; 2]>;

/// The strategies a player consults, in order, for each mode.
///
/// The standard chain is `[Base, Attack]` in Regular mode and
/// `[Attack, Base]` in Attack mode.
#[derive(Clone, Debug)]
pub struct StrategyChain {
    regular: Chain,
    attack: Chain,
}

impl StrategyChain {
    /// Build a chain from explicit lists.
    pub fn new(
        regular: impl IntoIterator<Item = Arc<dyn Strategy>>,
        attack: impl IntoIterator<Item = Arc<dyn Strategy>>,
    ) -> Self {
        Self {
            regular: regular.into_iter().collect(),
            attack: attack.into_iter().collect(),
        }
    }

    /// `[Base, Attack]` / `[Attack, Base]`.
    #[must_use]
    pub fn standard() -> Self {
        let base: Arc<dyn Strategy> = Arc::new(BaseStrategy);
        let attack: Arc<dyn Strategy> = Arc::new(AttackStrategy);

        Self {
            regular: smallvec![Arc::clone(&base), Arc::clone(&attack)],
            attack: smallvec![attack, base],
        }
    }

    /// Strategies consulted in `mode`, in order.
    #[must_use]
    pub fn for_mode(&self, mode: PlayerMode) -> &[Arc<dyn Strategy>] {
        match mode {
            PlayerMode::Regular => &self.regular,
            PlayerMode::Attack => &self.attack,
        }
    }

    /// First card offered by any strategy, in chain order.
    #[must_use]
    pub fn choose(&self, mode: PlayerMode, board: &GameBoard, hand: &[Card]) -> Option<Card> {
        self.for_mode(mode).iter().find_map(|strategy| {
            let choice = strategy.choose(board, hand);
            trace!(strategy = strategy.name(), ?choice, "strategy consulted");
            choice
        })
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self::standard()
    }
}
