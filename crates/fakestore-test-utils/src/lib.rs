//! Shared fixtures and strategies for testing the catalog crates.

pub mod fixtures;
pub mod proptest;

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honors `RUST_LOG` and defaults to debug logs from the catalog crates.
/// Safe to call from every test; only the first call installs anything.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("off,fakestore_api=debug,fakestore_catalog=debug"))
        .unwrap_or_default();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
