//! # fishing-game
//!
//! A shedding card game engine in the Crazy Eights family, played with a
//! standard 52-card deck by AI players and, optionally, one human.
//!
//! ## Rules in Brief
//!
//! A card may be played on the deposit pile if it shares suit or rank with
//! the top card. Four ranks carry effects:
//!
//! - **Ace**: the next player loses their turn
//! - **Two**: the next player draws two more cards unless they stack a Two
//! - **Ten**: play reverses direction
//! - **Jack**: wild, the player names the next suit
//!
//! The first player to empty their hand wins. Remaining hands are scored
//! afterwards, lower is better.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: the director's turn loop is the only code that
//!    mutates hands, piles and turn order.
//!
//! 2. **Pluggable Decisions**: AI players pick cards through an ordered
//!    chain of `Strategy` trait objects; a human seat goes through the
//!    `HumanInput` bridge instead.
//!
//! 3. **Reproducible**: a seeded `GameRng` fixes shuffles and seating.
//!
//! ## Modules
//!
//! - `core`: cards, seats, RNG, configuration, errors
//! - `board`: draw pile, deposit pile, penalty counter, legality
//! - `players`: hands, modes, and the seating ring
//! - `strategy`: card selection policies for AI players
//! - `input`: the human input bridge
//! - `events`: game events and observers
//! - `director`: the turn loop
//!
//! ## Example
//!
//! ```no_run
//! use fishing_game::{Game, GameConfig, TracingObserver};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> Result<(), fishing_game::GameError> {
//! let mut game = Game::new(GameConfig::new(4).with_seed(7))?;
//! game.subscribe(TracingObserver);
//! game.begin(7)?;
//!
//! let outcome = game.run(CancellationToken::new()).await?;
//! println!("winner: {:?}", outcome.winner());
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod core;
pub mod director;
pub mod events;
pub mod input;
pub mod players;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Card, GameConfig, GameError, GameRng, MinimizerSeat, PlayerId, PlayerMap, Rank, Suit,
    DECK_SIZE,
};

pub use crate::board::{is_playable, DrawOutcome, GameBoard};

pub use crate::players::{Direction, Hand, Player, PlayerMode, PlayerRing, Seat};

pub use crate::strategy::{AttackStrategy, BaseStrategy, Strategy, StrategyChain};

pub use crate::input::{Decision, HumanInput, PendingDecision};

pub use crate::events::{EventBus, GameEvent, GameObserver, ObserverId, TracingObserver};

pub use crate::director::{
    Game, GameOutcome, GamePhase, GameStatus, PacingClock, Standing, TurnOutcome,
};
