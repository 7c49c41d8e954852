//! End-of-game standings.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::players::{Direction, PlayerRing, Seat};

/// A player's remaining-hand score once the game is over. Lower is better.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: Seat,
    pub score: u32,
}

/// Tally every hand in one lap from `start`, then sort ascending by score.
///
/// The sort is stable, so equal scores keep lap order.
#[must_use]
pub fn rank_players(ring: &PlayerRing, start: PlayerId, direction: Direction) -> Vec<Standing> {
    let mut standings: Vec<Standing> = ring
        .rotation_from(start, direction)
        .into_iter()
        .map(|id| {
            let player = ring.player(id);
            Standing {
                seat: player.seat(),
                score: player.final_score(),
            }
        })
        .collect();
    standings.sort_by_key(|s| s.score);
    standings
}

/// The score table as display lines: header, one line per player, and a
/// closing line naming the lowest score.
#[must_use]
pub fn score_table(standings: &[Standing]) -> Vec<String> {
    let mut lines = Vec::with_capacity(standings.len() + 2);
    lines.push("===== Scores (lower is better) =====".to_string());
    lines.extend(
        standings
            .iter()
            .map(|s| format!("{} : {} pts", s.seat, s.score)),
    );
    if let Some(best) = standings.first() {
        lines.push(format!(">>> Lowest score: {} <<<", best.seat));
    }
    lines
}
