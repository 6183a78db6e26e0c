use anyhow::{Context, Result};
use tracksql_etl::LoggingConfig;

/// Install the global logger. Output goes to stderr so stdout stays clean.
pub fn init(config: &LoggingConfig) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialise logging")
}
