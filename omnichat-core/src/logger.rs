//! Tracing initialization shared by binaries and integration tests.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
/// Reads the level from RUST_LOG (e.g. info, debug, trace); defaults to info
/// when unset. Safe to call once per process; returns an error if a global
/// subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
