//! # safe-action-log
//!
//! Installs the `tracing` subscriber that renders safe-action diagnostics:
//! the development-only success timing line, handler failure lines and
//! validation rejections.
//!
//! ```rust,ignore
//! safe_action_log::init()?;                                   // from environment
//! safe_action_log::init_with(safe_action_log::Config::production())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Subscriber construction and installation.
pub mod builder;
/// Logger configuration and presets.
pub mod config;
/// Logger errors.
pub mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Install the global subscriber configured from the environment.
pub fn init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Install the global subscriber with `config`.
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
