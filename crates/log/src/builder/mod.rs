//! Logger builder implementation

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Builds the fmt layer for one format with the shared display switches.
macro_rules! fmt_layer {
    ($display:expr, $($style:ident)?) => {
        fmt::layer()
            $(.$style())?
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder installs.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = self.config.display;
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match self.config.format {
            Format::Pretty => registry.with(fmt_layer!(display, pretty)).try_init(),
            Format::Compact => registry.with(fmt_layer!(display, compact)).try_init(),
            Format::Json => registry.with(fmt_layer!(display, json)).try_init(),
        };
        installed.map_err(|_| LogError::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger installed"
        );
        Ok(())
    }
}
