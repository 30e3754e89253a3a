//! Tracing and logging setup shared by every process embedding the catalog.

pub mod config;
/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}

/// Initialize process-wide observability from an explicit configuration.
///
/// Same idempotency as [`init`].
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}
