//! Synchronous fan-out of game events.
//!
//! Observers are called in registration order, on the task running the
//! turn loop, before the loop moves on. Observers must not block.

use super::event::GameEvent;

/// Receives every event emitted by a game.
pub trait GameObserver: Send {
    fn on_event(&self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: Fn(&GameEvent) + Send,
{
    fn on_event(&self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to detach the observer again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// Ordered list of observers.
///
/// Detached observers leave an empty slot behind, so ids stay valid.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Option<Box<dyn GameObserver>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer at the end of the delivery order.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        self.observers.push(Some(Box::new(observer)));
        ObserverId(self.observers.len() - 1)
    }

    /// Detach an observer. Returns false if it was already detached.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers
            .get_mut(id.0)
            .and_then(Option::take)
            .is_some()
    }

    /// Deliver `event` to every attached observer.
    pub fn emit(&self, event: &GameEvent) {
        for observer in self.observers.iter().flatten() {
            observer.on_event(event);
        }
    }

    /// Number of attached observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_delivery_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["first", "second"] {
            let log = Arc::clone(&log);
            bus.subscribe(move |event: &GameEvent| {
                log.lock().unwrap().push(format!("{tag}:{event}"));
            });
        }
        bus.emit(&GameEvent::info("hi"));

        assert_eq!(bus.len(), 2);
        assert_eq!(*log.lock().unwrap(), vec!["first:hi", "second:hi"]);
    }

    #[test]
    fn test_unsubscribe_detaches_only_that_observer() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let ids: Vec<ObserverId> = ["a", "b", "c"]
            .into_iter()
            .map(|tag| {
                let log = Arc::clone(&log);
                bus.subscribe(move |_: &GameEvent| log.lock().unwrap().push(tag))
            })
            .collect();

        assert!(bus.unsubscribe(ids[1]));
        assert!(!bus.unsubscribe(ids[1]));
        bus.emit(&GameEvent::info("x"));

        assert_eq!(bus.len(), 2);
        assert_eq!(*log.lock().unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn test_empty_bus() {
        let bus = EventBus::new();
        assert!(bus.is_empty());
        bus.emit(&GameEvent::info("nobody listens"));
    }
}
