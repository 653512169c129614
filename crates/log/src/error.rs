//! Logger errors

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the logger
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid filter: {0}")]
    Filter(String),

    /// The format name is not one of `pretty`, `compact`, `json`.
    #[error("unknown log format `{0}`")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
