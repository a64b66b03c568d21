//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Env var checked before `RUST_LOG`.
pub const ENV_LOG_FILTER: &str = "DONNER_LOG";

/// Install the global fmt subscriber.
///
/// Filter precedence: `DONNER_LOG`, then `RUST_LOG`, then the configured level.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match config.effective_format() {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if result.is_err() {
        ::tracing::debug!("tracing subscriber already installed");
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    std::env::var(ENV_LOG_FILTER)
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| {
            EnvFilter::try_new(config.effective_level()).unwrap_or_else(|_| EnvFilter::new("info"))
        })
}
