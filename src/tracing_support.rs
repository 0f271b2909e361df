#![cfg(feature = "tracing")]
//! Subscriber setup for the `tracing` feature.
//!
//! The library itself only emits spans (structural mutations and the
//! algorithm entry points are instrumented); hosts that want to see them
//! can install their own subscriber or call [`init`] for a plain stderr
//! formatter.

use std::sync::Once;

/// Installs a global fmt subscriber once.  Safe to call repeatedly; later
/// calls (or an already-installed subscriber) are ignored.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_target(false).try_init();
    });
}
