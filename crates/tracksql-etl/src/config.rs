use log::LevelFilter;
use std::str::FromStr;

use crate::load::DEFAULT_TRACKS_KEY;

/// Configuration for a conversion.
///
/// The `tracksql` binary always runs with [`Config::default`]; there is no
/// config file and no environment lookup. Embedders build one in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Top-level key holding the track collection.
    pub tracks_key: String,

    /// Log output settings.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracks_key: String::from(DEFAULT_TRACKS_KEY),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

impl LoggingConfig {
    /// The configured level, falling back to `info` when it does not parse.
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}
