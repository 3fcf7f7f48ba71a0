//! Tracing/logging (shared setup).

pub mod config;
/// Tracing configuration (filters, output format).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ConfigError> {
    let config = ObservabilityConfig::from_env()?;
    tracing::init(&config);
    Ok(())
}
