//! Inter-turn pacing delay, adjustable while a game runs.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::core::{GameError, DEFAULT_PACING_DELAY_MS};

/// Shared clock for the pause before each turn.
///
/// The delay lives in a `watch` channel: changing it wakes any pause in
/// progress early, and front ends can `subscribe` to follow it.
#[derive(Debug)]
pub struct PacingClock {
    delay_ms: watch::Sender<u64>,
}

impl PacingClock {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        let (delay_ms, _) = watch::channel(delay_ms);
        Self { delay_ms }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        *self.delay_ms.borrow()
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    /// Set a new delay and cut short any pause in progress.
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.send_replace(delay_ms);
    }

    /// Follow delay changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.delay_ms.subscribe()
    }

    /// Sleep for the current delay.
    ///
    /// Returns early with `Ok` if the delay is changed meanwhile, and with
    /// `Cancelled` if the token fires.
    pub async fn pause(&self, cancel: &CancellationToken) -> Result<(), GameError> {
        if cancel.is_cancelled() {
            return Err(GameError::Cancelled);
        }

        let mut changes = self.delay_ms.subscribe();
        let delay = Duration::from_millis(*changes.borrow_and_update());
        if delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(GameError::Cancelled),
            _ = changes.changed() => Ok(()),
            () = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

impl Default for PacingClock {
    fn default() -> Self {
        Self::new(DEFAULT_PACING_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_pause_waits_for_delay() {
        let clock = PacingClock::new(500);
        let cancel = CancellationToken::new();

        let start = Instant::now();
        clock.pause(&cancel).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let clock = PacingClock::new(0);
        assert_eq!(clock.pause(&CancellationToken::new()).await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_pause() {
        let clock = Arc::new(PacingClock::new(60_000));
        let cancel = CancellationToken::new();

        let task = {
            let clock = Arc::clone(&clock);
            let cancel = cancel.clone();
            tokio::spawn(async move { clock.pause(&cancel).await })
        };
        tokio::task::yield_now().await;
        cancel.cancel();

        assert_eq!(task.await.unwrap(), Err(GameError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_delay_cuts_pause_short() {
        let clock = Arc::new(PacingClock::new(60_000));
        let cancel = CancellationToken::new();

        let start = Instant::now();
        let task = {
            let clock = Arc::clone(&clock);
            tokio::spawn(async move { clock.pause(&cancel).await })
        };
        tokio::task::yield_now().await;
        clock.set_delay_ms(10);

        assert_eq!(task.await.unwrap(), Ok(()));
        assert!(start.elapsed() < Duration::from_millis(60_000));
        assert_eq!(clock.delay_ms(), 10);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let clock = PacingClock::new(900);
        let mut changes = clock.subscribe();
        assert_eq!(*changes.borrow_and_update(), 900);

        clock.set_delay_ms(250);

        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), 250);
        assert_eq!(clock.delay(), Duration::from_millis(250));
    }
}
