//! Logging setup.
//!
//! Logs go to stderr so stdout stays free for the rendered view.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Install the global fmt subscriber. `level` accepts any `EnvFilter`
/// directive (`info`, `translator_client=debug`, ...); an unparseable
/// directive falls back to `warn`.
pub fn init_logger(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

fn build_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new(DEFAULT_LEVEL);
    }
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?} ({}), using {}", level, e, DEFAULT_LEVEL);
        EnvFilter::new(DEFAULT_LEVEL)
    })
}
