//! Players and the seating ring.
//!
//! - `Player`: hand, mode, human/minimizer flags, strategy chain
//! - `PlayerRing`: index-addressed cycle with direction-aware neighbours
//! - `Seat`: id + display name, as carried in events

pub mod player;
pub mod ring;

pub use player::{Hand, Player, PlayerMode, Seat};
pub use ring::{Direction, PlayerRing};
