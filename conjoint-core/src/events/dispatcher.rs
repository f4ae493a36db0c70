//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::ConjointEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec and
/// is effectively free.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ConjointEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ConjointEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn ConjointEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked");
            }
        }
    }

    pub fn emit_dataset_generated(&self, event: &DatasetGeneratedEvent) {
        self.emit(|h| h.on_dataset_generated(event));
    }

    pub fn emit_shares_estimated(&self, event: &SharesEstimatedEvent) {
        self.emit(|h| h.on_shares_estimated(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counter(AtomicUsize);

    impl ConjointEventHandler for Counter {
        fn on_shares_estimated(&self, _event: &SharesEstimatedEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Panicker;

    impl ConjointEventHandler for Panicker {
        fn on_shares_estimated(&self, _event: &SharesEstimatedEvent) {
            panic!("handler failure");
        }
    }

    #[test]
    fn test_dispatch_reaches_registered_handlers() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(counter.clone());
        assert_eq!(dispatcher.handler_count(), 1);

        let event = SharesEstimatedEvent {
            scenario_count: 2,
            percentages: vec![18, 82],
        };
        dispatcher.emit_shares_estimated(&event);
        dispatcher.emit_shares_estimated(&event);
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_handler_does_not_block_others() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(Panicker));
        dispatcher.register(counter.clone());

        dispatcher.emit_shares_estimated(&SharesEstimatedEvent {
            scenario_count: 1,
            percentages: vec![100],
        });
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
