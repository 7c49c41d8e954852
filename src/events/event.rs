//! Events emitted by the game director.
//!
//! Every event is a self-contained snapshot: observers never need to reach
//! back into the engine to render one.

use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::players::{Direction, Seat};

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A card landed on the deposit pile.
    TurnPlayed {
        player: Seat,
        card: Card,
        top: Option<Card>,
        direction: Direction,
    },

    /// A draw resolved (`count` may be 0 if the supply is exhausted).
    CardsDrawn {
        player: Seat,
        count: usize,
        top: Option<Card>,
        direction: Direction,
    },

    /// Free-form table talk: deals, penalties, skips, suits, scores.
    Info { message: String },

    /// The deposit pile was recycled into the draw pile.
    Reshuffled { message: String },

    /// A hand just went down to a single card.
    PlayerLowHand { player: Seat },

    /// A hand was emptied. Emitted once per game.
    GameWon { player: Seat },

    /// The engine is waiting on the human input bridge.
    HumanTurnStarted {
        player: Seat,
        top: Option<Card>,
        pending_draw: u32,
        hand: Vec<Card>,
    },

    /// A human's turn was skipped by an Ace.
    HumanTurnSkipped { player: Seat },
}

impl GameEvent {
    /// Build an `Info` event.
    pub fn info(message: impl Into<String>) -> Self {
        GameEvent::Info {
            message: message.into(),
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<&Seat> {
        match self {
            GameEvent::TurnPlayed { player, .. }
            | GameEvent::CardsDrawn { player, .. }
            | GameEvent::PlayerLowHand { player }
            | GameEvent::GameWon { player }
            | GameEvent::HumanTurnStarted { player, .. }
            | GameEvent::HumanTurnSkipped { player } => Some(player),
            GameEvent::Info { .. } | GameEvent::Reshuffled { .. } => None,
        }
    }
}

struct TopCard(Option<Card>);

impl std::fmt::Display for TopCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(card) => write!(f, "{card}"),
            None => f.write_str("empty"),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnPlayed {
                player,
                card,
                top,
                direction,
            } => write!(
                f,
                "{player} played {card} - top: {} - direction: {direction}",
                TopCard(*top)
            ),
            GameEvent::CardsDrawn {
                player,
                count,
                top,
                direction,
            } => write!(
                f,
                "{player} draws {count} card(s) - top: {} - direction: {direction}",
                TopCard(*top)
            ),
            GameEvent::Info { message } | GameEvent::Reshuffled { message } => {
                f.write_str(message)
            }
            GameEvent::PlayerLowHand { player } => write!(f, "{player} has one card left!"),
            GameEvent::GameWon { player } => write!(f, "----- {player} won the game! -----"),
            GameEvent::HumanTurnStarted {
                player,
                top,
                pending_draw,
                ..
            } => write!(
                f,
                "{player}, your turn - top: {} - pending draw: {pending_draw}",
                TopCard(*top)
            ),
            GameEvent::HumanTurnSkipped { player } => write!(f, "{player}'s turn is skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Rank, Suit};

    fn seat() -> Seat {
        Seat {
            id: PlayerId::new(1),
            name: "Bo".to_string(),
        }
    }

    #[test]
    fn test_display_turn_played() {
        let event = GameEvent::TurnPlayed {
            player: seat(),
            card: Card::new(Rank::Seven, Suit::Hearts),
            top: Some(Card::new(Rank::Seven, Suit::Hearts)),
            direction: Direction::CounterClockwise,
        };
        assert_eq!(
            event.to_string(),
            "Bo played 7♥ - top: 7♥ - direction: counter-clockwise"
        );
    }

    #[test]
    fn test_player_accessor() {
        assert_eq!(GameEvent::GameWon { player: seat() }.player(), Some(&seat()));
        assert_eq!(GameEvent::info("hello").player(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let event = GameEvent::HumanTurnSkipped { player: seat() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "human_turn_skipped");

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
