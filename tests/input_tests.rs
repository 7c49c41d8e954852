//! Human input bridge tests.
//!
//! These tests drive the bridge from other tasks and threads, the way a
//! front end would.

use std::sync::Arc;
use std::time::Duration;

use fishing_game::{Card, Decision, GameError, HumanInput, Rank, Suit};
use tokio_util::sync::CancellationToken;

/// A submission from another OS thread resolves an awaiting task.
#[tokio::test]
async fn test_submit_from_thread() {
    let bridge = Arc::new(HumanInput::new());
    let cancel = CancellationToken::new();
    let pending = bridge.arm();

    let handle = {
        let bridge = Arc::clone(&bridge);
        std::thread::spawn(move || bridge.submit_draw())
    };

    assert_eq!(pending.wait(&cancel).await, Ok(Decision::Draw));
    assert!(handle.join().unwrap());
}

/// A task waiting on the bridge is released by a later submission.
#[tokio::test]
async fn test_submit_from_task_while_waiting() {
    let bridge = Arc::new(HumanInput::new());
    let cancel = CancellationToken::new();
    let card = Card::new(Rank::Four, Suit::Spades);

    let waiter = {
        let bridge = Arc::clone(&bridge);
        let cancel = cancel.clone();
        tokio::spawn(async move { bridge.wait_for_decision(&cancel).await })
    };

    while !bridge.is_waiting() {
        tokio::task::yield_now().await;
    }
    assert!(bridge.submit_play(card, None));

    assert_eq!(
        waiter.await.unwrap(),
        Ok(Decision::Play { card, suit: None })
    );
}

/// Exactly one submission is taken per wait; the second is ignored.
#[tokio::test]
async fn test_second_submission_ignored() {
    let bridge = HumanInput::new();
    let cancel = CancellationToken::new();
    let pending = bridge.arm();

    assert!(bridge.submit_draw());
    assert!(!bridge.submit_play(Card::new(Rank::Two, Suit::Clubs), None));

    assert_eq!(pending.wait(&cancel).await, Ok(Decision::Draw));
}

/// Reset from another task ends a wait with `Cancelled`.
#[tokio::test(start_paused = true)]
async fn test_reset_from_task() {
    let bridge = Arc::new(HumanInput::new());
    let cancel = CancellationToken::new();
    let pending = bridge.arm();

    {
        let bridge = Arc::clone(&bridge);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            bridge.reset();
        });
    }

    assert_eq!(pending.wait(&cancel).await, Err(GameError::Cancelled));
    assert!(!bridge.is_waiting());
}

/// Without any submission, the wait only ends when the token fires.
#[tokio::test(start_paused = true)]
async fn test_wait_is_unbounded_until_cancelled() {
    let bridge = HumanInput::new();
    let cancel = CancellationToken::new();
    let pending = bridge.arm();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            cancel.cancel();
        });
    }

    let started = tokio::time::Instant::now();
    assert_eq!(pending.wait(&cancel).await, Err(GameError::Cancelled));
    assert!(started.elapsed() >= Duration::from_secs(3600));
}
