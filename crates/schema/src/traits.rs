//! Schema capability traits.
//!
//! A schema turns untrusted raw input into a typed value, or reports why it
//! cannot. It never panics and never returns an error through any channel
//! other than its `Err` value, so callers can treat every parse as data.

use async_trait::async_trait;
use serde_json::Value;

use crate::field_errors::FieldErrors;

// ============================================================================
// SYNC SCHEMA
// ============================================================================

/// A validator that parses raw input into [`Schema::Output`].
///
/// Implement this for any validation library by translating its result into
/// `Result<Output, Error>` and its error structure into [`FieldErrors`].
///
/// # Examples
///
/// ```rust
/// use safe_action_schema::{FieldErrors, Schema};
/// use serde_json::Value;
///
/// struct NonEmptyString;
///
/// impl Schema for NonEmptyString {
///     type Output = String;
///     type Error = FieldErrors;
///
///     fn safe_parse(&self, raw: &Value) -> Result<String, FieldErrors> {
///         match raw.as_str() {
///             Some(s) if !s.is_empty() => Ok(s.to_owned()),
///             _ => Err(FieldErrors::single("_root", "Expected a non-empty string")),
///         }
///     }
///
///     fn flatten(&self, error: &FieldErrors) -> FieldErrors {
///         error.clone()
///     }
/// }
///
/// assert!(NonEmptyString.safe_parse(&Value::Null).is_err());
/// ```
pub trait Schema: Send + Sync {
    /// Typed value produced on success.
    type Output: Send;

    /// Structured error produced on failure.
    type Error: Send + Sync;

    /// Parses `raw`, returning the typed value or the structured error.
    ///
    /// Must not panic for any input, including `null`.
    fn safe_parse(&self, raw: &Value) -> Result<Self::Output, Self::Error>;

    /// Flattens a structured error into per-field messages.
    ///
    /// Must be deterministic for a given error.
    fn flatten(&self, error: &Self::Error) -> FieldErrors;
}

// ============================================================================
// ASYNC SCHEMA
// ============================================================================

/// Async counterpart of [`Schema`] for validators that perform I/O.
///
/// Every [`Schema`] is an `AsyncSchema` through a blanket impl, so consumers
/// only need to accept this trait.
#[async_trait]
pub trait AsyncSchema: Send + Sync {
    /// Typed value produced on success.
    type Output: Send;

    /// Structured error produced on failure.
    type Error: Send + Sync;

    /// Parses `raw` asynchronously.
    async fn safe_parse_async(&self, raw: &Value) -> Result<Self::Output, Self::Error>;

    /// Flattens a structured error into per-field messages.
    ///
    /// Named apart from [`Schema::flatten`] so both traits can be in scope.
    fn flatten_errors(&self, error: &Self::Error) -> FieldErrors;
}

#[async_trait]
impl<S> AsyncSchema for S
where
    S: Schema,
{
    type Output = S::Output;
    type Error = S::Error;

    async fn safe_parse_async(&self, raw: &Value) -> Result<Self::Output, Self::Error> {
        Schema::safe_parse(self, raw)
    }

    fn flatten_errors(&self, error: &Self::Error) -> FieldErrors {
        Schema::flatten(self, error)
    }
}
