//! ConjointEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for observing engine events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// so a handler can be shared with a host-side UI thread.
pub trait ConjointEventHandler: Send + Sync {
    fn on_dataset_generated(&self, _event: &DatasetGeneratedEvent) {}
    fn on_shares_estimated(&self, _event: &SharesEstimatedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
