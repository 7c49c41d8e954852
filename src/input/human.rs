//! Single-slot rendezvous between the turn loop and a human front end.
//!
//! The engine arms the slot, announces the human turn, and waits. The front
//! end, from any thread or task, resolves the slot with `submit_play` or
//! `submit_draw`, or abandons it with `reset`.
//!
//! ## Guarantees
//!
//! - At most one wait is outstanding; arming a new one cancels the old one.
//! - Submissions with no armed wait are ignored.
//! - A wait ends with exactly one outcome: a decision or `Cancelled`.

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::{Card, GameError, Suit};

/// What the human decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Play `card`; `suit` is the wild suit to name if it is a Jack.
    Play { card: Card, suit: Option<Suit> },
    /// Draw instead of playing.
    Draw,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    sender: Option<oneshot::Sender<Decision>>,
}

/// The human input bridge. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct HumanInput {
    slot: Mutex<Slot>,
}

impl HumanInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the slot for a new decision, superseding any previous wait.
    ///
    /// Submissions made after this call are captured even if the caller has
    /// not started awaiting yet.
    pub fn arm(&self) -> PendingDecision<'_> {
        let (sender, receiver) = oneshot::channel();
        let mut slot = self.slot.lock();
        slot.generation += 1;
        if slot.sender.replace(sender).is_some() {
            debug!(generation = slot.generation, "previous human wait superseded");
        }

        PendingDecision {
            bridge: self,
            generation: slot.generation,
            receiver,
        }
    }

    /// Arm the slot and wait for a decision.
    pub async fn wait_for_decision(&self, cancel: &CancellationToken) -> Result<Decision, GameError> {
        self.arm().wait(cancel).await
    }

    /// Resolve the pending wait with a play. Returns false if none was pending.
    pub fn submit_play(&self, card: Card, suit: Option<Suit>) -> bool {
        self.resolve(Decision::Play { card, suit })
    }

    /// Resolve the pending wait with a draw. Returns false if none was pending.
    pub fn submit_draw(&self) -> bool {
        self.resolve(Decision::Draw)
    }

    /// Cancel any pending wait.
    pub fn reset(&self) {
        let mut slot = self.slot.lock();
        if slot.sender.take().is_some() {
            debug!(generation = slot.generation, "human wait reset");
        }
    }

    /// Whether a wait is currently armed.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.slot.lock().sender.is_some()
    }

    fn resolve(&self, decision: Decision) -> bool {
        let sender = self.slot.lock().sender.take();
        match sender {
            Some(sender) => sender.send(decision).is_ok(),
            None => false,
        }
    }

    fn disarm(&self, generation: u64) {
        let mut slot = self.slot.lock();
        if slot.generation == generation {
            slot.sender = None;
        }
    }
}

/// An armed wait, tied to the bridge that created it.
#[derive(Debug)]
pub struct PendingDecision<'a> {
    bridge: &'a HumanInput,
    generation: u64,
    receiver: oneshot::Receiver<Decision>,
}

impl PendingDecision<'_> {
    /// Wait for the decision, or `Cancelled` if the token fires, the bridge
    /// is reset, or a newer wait supersedes this one.
    pub async fn wait(self, cancel: &CancellationToken) -> Result<Decision, GameError> {
        let PendingDecision {
            bridge,
            generation,
            receiver,
        } = self;

        // Cancellation wins over a decision that arrived at the same time.
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                bridge.disarm(generation);
                Err(GameError::Cancelled)
            }
            result = receiver => result.map_err(|_| GameError::Cancelled),
        }
    }
}
