//! The circular seating order.
//!
//! Players sit in a `PlayerMap` in seating order. Neighbours are found by
//! index arithmetic in the current `Direction`; nothing holds references to
//! other players.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::player::{Player, PlayerMode};
use crate::core::{GameError, PlayerId, PlayerMap};

/// Global traversal direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index (+1).
    #[default]
    Clockwise,
    /// Decreasing seat index (-1).
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// `+1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("clockwise"),
            Direction::CounterClockwise => f.write_str("counter-clockwise"),
        }
    }
}

/// Every player exactly once, in a cycle.
#[derive(Clone, Debug)]
pub struct PlayerRing {
    players: PlayerMap<Player>,
}

impl PlayerRing {
    /// Seat `player_count` players built by `factory`.
    ///
    /// Fewer than two seats cannot advance turns and is rejected.
    pub fn new(
        player_count: usize,
        factory: impl FnMut(PlayerId) -> Player,
    ) -> Result<Self, GameError> {
        if !(2..=255).contains(&player_count) {
            return Err(GameError::PlayerCount {
                requested: player_count,
            });
        }
        Ok(Self {
            players: PlayerMap::new(player_count, factory),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.player_count()
    }

    /// Always false: a ring holds at least two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Players in seating order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut().map(|(_, p)| p)
    }

    /// The seat after `id` in `direction`.
    #[must_use]
    pub fn neighbor(&self, id: PlayerId, direction: Direction) -> PlayerId {
        let len = self.len();
        let index = match direction {
            Direction::Clockwise => (id.index() + 1) % len,
            Direction::CounterClockwise => (id.index() + len - 1) % len,
        };
        PlayerId::new(index as u8)
    }

    /// One full lap of seats starting at `start`.
    #[must_use]
    pub fn rotation_from(&self, start: PlayerId, direction: Direction) -> Vec<PlayerId> {
        let mut order = Vec::with_capacity(self.len());
        let mut seat = start;
        for _ in 0..self.len() {
            order.push(seat);
            seat = self.neighbor(seat, direction);
        }
        order
    }

    /// Whether anyone is down to their last card.
    #[must_use]
    pub fn any_single_card(&self) -> bool {
        self.iter().any(|p| p.hand_len() == 1)
    }

    /// Total cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.iter().map(Player::hand_len).sum()
    }

    /// Every player goes into Attack mode iff its downstream neighbour in
    /// `direction` holds exactly one card. Returns how many players changed.
    pub fn reevaluate_modes(&mut self, direction: Direction) -> usize {
        let targets: Vec<PlayerMode> = PlayerId::all(self.len())
            .map(|id| {
                if self.player(self.neighbor(id, direction)).hand_len() == 1 {
                    PlayerMode::Attack
                } else {
                    PlayerMode::Regular
                }
            })
            .collect();

        let changed = self
            .iter_mut()
            .zip(targets)
            .filter_map(|(player, mode)| player.set_mode(mode).then_some(()))
            .count();

        debug!(%direction, changed, "player modes re-evaluated");
        changed
    }
}
