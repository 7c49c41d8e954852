//! An observer that writes the game to the `tracing` log.

use tracing::info;

use super::bus::GameObserver;
use super::event::GameEvent;

/// Logs every event at `info` under the `fishing_game::table` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&self, event: &GameEvent) {
        match event {
            GameEvent::Reshuffled { .. } => info!(target: "fishing_game::table", reshuffle = true, "{event}"),
            GameEvent::GameWon { player } => {
                info!(target: "fishing_game::table", winner = %player, "{event}")
            }
            _ => info!(target: "fishing_game::table", "{event}"),
        }
    }
}
