//! Tracing subscriber setup for the CLI

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive (e.g. `info`, `riskcheck=debug`)
pub const LOG_ENV: &str = "RISKCHECK_LOG";

/// `RISKCHECK_LOG` wins when it parses, then `--verbose` (debug), else warnings only
pub fn env_filter(verbose: bool, env_value: Option<&str>) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    env_value
        .and_then(|directive| EnvFilter::try_new(directive.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install a stderr fmt subscriber. Fails if a global subscriber is already set.
pub fn init(verbose: bool, ansi: bool) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(verbose, env_value.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
