//! Logging setup for processes embedding the product catalog.
//!
//! The catalog emits `tracing` events (writes and searches at `debug`, lock
//! poisoning and bad configuration at `warn`); this crate installs the
//! subscriber that renders them.

pub mod tracing;

/// Install the JSON subscriber. Repeated calls are no-ops.
pub fn init() {
    tracing::init();
}
