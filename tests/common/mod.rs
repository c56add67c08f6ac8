//! Shared test utilities for snmp-varbind integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod fixtures;

pub use fixtures::*;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per binary.
///
/// Filtered by `RUST_LOG`, e.g. `RUST_LOG=snmp_varbind::ber=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
