//! Human turn arbitration.
//!
//! `HumanInput` is the only engine state meant to be touched from outside
//! the turn loop. Everything else must be read in step with event delivery.

pub mod human;

pub use human::{Decision, HumanInput, PendingDecision};
