//! A single seat at the table: hand, mode, and decision policy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::GameBoard;
use crate::core::{Card, PlayerId, Suit};
use crate::strategy::StrategyChain;

/// Cards held by a player. Order matters: strategies scan it front to back.
pub type Hand = SmallVec<[Card; 8]>;

/// Which strategy takes precedence for an AI player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMode {
    /// Hold attack cards back, shed ordinary matches first.
    #[default]
    Regular,
    /// The downstream neighbour is about to win: spend attack cards first.
    Attack,
}

/// Public identity of a player, carried in events.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A player and everything it owns.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    mode: PlayerMode,
    strategies: StrategyChain,
    is_human: bool,
    is_minimizer: bool,
}

impl Player {
    /// A regular AI player with an empty hand and the standard strategy chain.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            mode: PlayerMode::Regular,
            strategies: StrategyChain::standard(),
            is_human: false,
            is_minimizer: false,
        }
    }

    #[must_use]
    pub fn with_human(mut self, is_human: bool) -> Self {
        self.is_human = is_human;
        self
    }

    #[must_use]
    pub fn with_minimizer(mut self, is_minimizer: bool) -> Self {
        self.is_minimizer = is_minimizer;
        self
    }

    /// Replace the strategy chain.
    #[must_use]
    pub fn with_strategies(mut self, strategies: StrategyChain) -> Self {
        self.strategies = strategies;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        Seat {
            id: self.id,
            name: self.name.clone(),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.is_human
    }

    #[must_use]
    pub fn is_minimizer(&self) -> bool {
        self.is_minimizer
    }

    #[must_use]
    pub fn strategies(&self) -> &StrategyChain {
        &self.strategies
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Add a card to the end of the hand.
    pub fn take_card(&mut self, card: Card) {
        debug_assert!(!card.is_virtual(), "virtual cards never enter a hand");
        self.hand.push(card);
    }

    /// Remove one copy of `card`. Returns false if it was not held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the whole hand.
    pub fn set_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand = cards.into_iter().collect();
    }

    /// Ask the strategy chain for a card. `None` means draw.
    ///
    /// A minimizer first orders its hand by descending score (stable), which
    /// changes what the keep-last scan lands on.
    pub fn play(&mut self, board: &GameBoard) -> Option<Card> {
        if self.is_minimizer {
            self.hand.sort_by(|a, b| b.score().cmp(&a.score()));
        }
        self.strategies.choose(self.mode, board, &self.hand)
    }

    /// Wild suit for a Jack: the most common suit in hand.
    ///
    /// Ties go to the suit seen first in hand order; an empty hand
    /// falls back to `Suit::FALLBACK`.
    #[must_use]
    pub fn choose_suit(&self) -> Suit {
        let mut counts = [0usize; 4];
        let mut first_seen: SmallVec<[Suit; 4]> = SmallVec::new();

        for card in &self.hand {
            let suit = card.suit();
            if counts[suit.index()] == 0 {
                first_seen.push(suit);
            }
            counts[suit.index()] += 1;
        }

        let mut best: Option<Suit> = None;
        for suit in first_seen {
            match best {
                Some(current) if counts[current.index()] >= counts[suit.index()] => {}
                _ => best = Some(suit),
            }
        }

        best.unwrap_or(Suit::FALLBACK)
    }

    /// Sum of the fixed rank scores of the remaining hand.
    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.hand.iter().map(|c| c.score()).sum()
    }

    /// Switch mode. Returns true if it changed.
    pub fn set_mode(&mut self, mode: PlayerMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(player = %self.name, from = ?self.mode, to = ?mode, "mode change");
        self.mode = mode;
        true
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
