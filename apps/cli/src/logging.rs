//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout stays clean for reports and exports.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Picks the filter directive: `--log-level`, then `RUST_LOG`, then the
/// configured level.
pub fn filter_directive(cli_level: Option<&str>, env_level: Option<&str>, configured: &str) -> String {
    [cli_level, env_level]
        .into_iter()
        .flatten()
        .find(|level| !level.trim().is_empty())
        .unwrap_or(configured)
        .to_owned()
}

/// Installs the global stderr subscriber.
pub fn init(cli_level: Option<&str>, configured: &str) -> anyhow::Result<()> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(cli_level, env_level.as_deref(), configured);

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{directive}': {e}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    tracing::debug!(filter = %directive, "logging initialized");
    Ok(())
}
