//! Game events and their delivery.
//!
//! ## Key Types
//!
//! - `GameEvent`: what happened, with a renderable snapshot of the table
//! - `GameObserver`: anything that consumes events (closures included)
//! - `EventBus`: ordered, synchronous fan-out; observers can be detached
//! - `TracingObserver`: renders events to the `tracing` log

pub mod bus;
pub mod event;
pub mod log;

pub use bus::{EventBus, GameObserver, ObserverId};
pub use event::GameEvent;
pub use log::TracingObserver;
