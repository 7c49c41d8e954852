//! Card model: ranks, suits, fixed scores, and the virtual wild-suit marker.
//!
//! ## Scores
//!
//! Every rank carries a fixed end-game penalty score, looked up from a table:
//!
//! | Rank          | Score      |
//! |---------------|------------|
//! | Ace           | 11         |
//! | Two..Ten      | face value |
//! | Jack/Queen/King | 2        |
//!
//! ## Virtual cards
//!
//! When a Jack is played, the chosen wild suit is recorded by pushing a
//! *virtual* copy of the Jack carrying that suit onto the deposit pile.
//! Virtual cards never enter a hand and are dropped when the deposit pile
//! is recycled into the draw pile.

use serde::{Deserialize, Serialize};

/// Number of physical cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// One of the 13 face values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Fixed end-game score of this rank.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 2,
        }
    }

    /// Attack ranks carry a global side effect when played.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, Rank::Ace | Rank::Two | Rank::Ten | Rank::Jack)
    }

    /// Short label used when rendering a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit picked when a wild suit has to be chosen from an empty hand.
    pub const FALLBACK: Suit = Suit::Diamonds;

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    is_virtual: bool,
}

impl Card {
    /// Create a physical card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_virtual: false,
        }
    }

    /// Create a virtual marker recording a wild-suit choice.
    #[must_use]
    pub const fn marker(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_virtual: true,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn is_virtual(self) -> bool {
        self.is_virtual
    }

    /// End-game score of this card.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.rank.score()
    }

    #[must_use]
    pub const fn is_attack(self) -> bool {
        self.rank.is_attack()
    }

    /// Same suit or same rank as `other`.
    #[must_use]
    pub fn matches(self, other: Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// A full, ordered 52-card deck (rank-major).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
        .collect()
}
