//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber
///
/// `filter` takes precedence over `RUST_LOG`. Returns false when a
/// subscriber was already installed, which is harmless.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid log filter {directive:?}: {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
