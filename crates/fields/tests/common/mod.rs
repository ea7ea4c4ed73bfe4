//! Common test utilities for gbfs-fields

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber filtered by `RUST_LOG`, once per binary.
///
/// Run with `RUST_LOG=gbfs_fields=trace` to see every rejection and every
/// price source kind.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
