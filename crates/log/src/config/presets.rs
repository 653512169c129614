//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, FORMAT_ENV_VAR, Format, LEVEL_ENV_VAR};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration through `lookup`, which maps a variable name to its value.
    ///
    /// The filter comes from `SAFE_ACTION_LOG`, then `RUST_LOG`; the format from
    /// `SAFE_ACTION_LOG_FORMAT`, falling back to compact when unset or unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV_VAR).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_ENV_VAR) {
            config.format = format.parse().unwrap_or_default();
        }

        if config.format == Format::Json {
            config.display.colors = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                target: true,
            },
        }
    }
}
