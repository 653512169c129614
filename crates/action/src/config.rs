//! Per-action configuration.
//!
//! Configuration is an explicit value handed to the factory. The wrapper
//! itself never reads process state; [`ActionConfig::from_env`] is the one
//! place that does, and only when the caller asks for it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable consulted first for the execution mode.
pub const MODE_ENV_VAR: &str = "SAFE_ACTION_ENV";

/// Environment variable consulted when [`MODE_ENV_VAR`] is unset.
pub const FALLBACK_MODE_ENV_VAR: &str = "APP_ENV";

/// Execution mode of the surrounding application.
///
/// Only [`Development`](ExecutionMode::Development) enables the success
/// timing log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExecutionMode {
    /// Local development; success timings are logged.
    Development,
    /// Anything that is not development or test.
    #[default]
    Production,
    /// Automated tests.
    Test,
}

impl ExecutionMode {
    /// Reads the mode from [`MODE_ENV_VAR`], then [`FALLBACK_MODE_ENV_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the mode through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(MODE_ENV_VAR)
            .or_else(|| lookup(FALLBACK_MODE_ENV_VAR))
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Parses a mode name. Unknown names are [`Production`](Self::Production).
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Self::Development,
            "test" => Self::Test,
            _ => Self::Production,
        }
    }

    /// Returns `true` for [`Development`](Self::Development).
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    /// Lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for ExecutionMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour switches for one safe action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Execution mode; gates the success timing log line.
    pub mode: ExecutionMode,
    /// Whether responses carry `metadata.duration`.
    pub track_duration: bool,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Production,
            track_duration: true,
        }
    }
}

impl ActionConfig {
    /// Default configuration with the mode read from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            mode: ExecutionMode::from_env(),
            ..Self::default()
        }
    }

    /// Development preset: durations tracked and logged.
    #[must_use]
    pub fn development() -> Self {
        Self {
            mode: ExecutionMode::Development,
            track_duration: true,
        }
    }

    /// Production preset: durations tracked, not logged.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Replaces the execution mode.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Turns duration tracking on or off.
    pub fn with_duration_tracking(mut self, enabled: bool) -> Self {
        self.track_duration = enabled;
        self
    }

    pub(crate) fn logs_success_timing(&self) -> bool {
        self.track_duration && self.mode.is_development()
    }
}
