//! Ready-made [`Schema`] implementations.
//!
//! - [`SerdeSchema`] uses a type's `Deserialize` impl for structure and
//!   registered checks for constraints that serde cannot express.
//! - [`SchemaFn`] wraps a closure that already produces [`FieldErrors`].

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::field_errors::FieldErrors;
use crate::issue::{Issue, Issues, PathSegment};
use crate::traits::Schema;

/// Message recorded for a field serde reports as missing.
pub const REQUIRED_MESSAGE: &str = "Required";

type Check<T> = Arc<dyn Fn(&T, &mut Issues) + Send + Sync>;

// ============================================================================
// SERDE SCHEMA
// ============================================================================

/// Schema backed by `serde` deserialization plus refinement checks.
///
/// Deserialization decides the shape; checks run on the typed value
/// afterwards. All checks run, so one parse reports every failing field.
///
/// Deserialization stops at the first structural error: input with several
/// missing or mistyped fields reports only the first one serde meets, and the
/// checks do not run. That issue is placed at the path of the offending value,
/// so `{"profile": {}}` missing `profile.name` is reported under `profile`.
///
/// # Examples
///
/// ```rust
/// use safe_action_schema::{Schema, SerdeSchema};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct UpdateUser {
///     id: String,
///     name: String,
/// }
///
/// let schema = SerdeSchema::<UpdateUser>::new().refine(
///     "name",
///     |u| u.name.chars().count() >= 3,
///     "Name should be at least 3 characters long",
/// );
///
/// let err = schema
///     .safe_parse(&serde_json::json!({ "id": "1", "name": "Al" }))
///     .unwrap_err();
/// assert!(schema.flatten(&err).contains("name"));
/// ```
pub struct SerdeSchema<T> {
    checks: Vec<Check<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T> {
    /// Creates a schema with no refinement checks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Registers a check that may record any number of issues.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&T, &mut Issues) + Send + Sync + 'static,
    {
        self.checks.push(Arc::new(check));
        self
    }

    /// Registers a predicate over the whole value reported against `field`.
    pub fn refine<P>(
        self,
        field: impl Into<PathSegment>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let field = field.into();
        let message = message.into();
        self.check(move |value, issues| {
            if !predicate(value) {
                issues.push(Issue {
                    path: vec![field.clone()],
                    message: message.clone(),
                });
            }
        })
    }

    /// Number of registered checks.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeSchema<T> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for SerdeSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeSchema")
            .field("target", &std::any::type_name::<T>())
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl<T> Schema for SerdeSchema<T>
where
    T: DeserializeOwned + Send,
{
    type Output = T;
    type Error = Issues;

    fn safe_parse(&self, raw: &Value) -> Result<T, Issues> {
        let value: T = serde_path_to_error::deserialize(raw)
            .map_err(|e| Issues::from(issue_from_serde(&e)))?;

        let mut issues = Issues::new();
        for check in &self.checks {
            check(&value, &mut issues);
        }

        if issues.is_empty() {
            Ok(value)
        } else {
            Err(issues)
        }
    }

    fn flatten(&self, error: &Issues) -> FieldErrors {
        error.flatten()
    }
}

/// Maps a deserialization failure to an issue at the failing value's path.
///
/// serde reports a missing field against the enclosing object, so its name is
/// appended to the path.
fn issue_from_serde(error: &serde_path_to_error::Error<serde_json::Error>) -> Issue {
    let path: Vec<PathSegment> = error
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(PathSegment::from(key.clone())),
            Segment::Seq { index } => Some(PathSegment::Index(*index)),
            Segment::Enum { variant } => Some(PathSegment::from(variant.clone())),
            _ => None,
        })
        .collect();

    let message = error.inner().to_string();
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field.to_owned());

    match missing {
        Some(field) => Issue {
            path,
            message: Cow::Borrowed(REQUIRED_MESSAGE),
        }
        .at(field),
        None => Issue {
            path,
            message: Cow::Owned(message),
        },
    }
}

// ============================================================================
// CLOSURE SCHEMA
// ============================================================================

/// Schema backed by a closure returning [`FieldErrors`] directly.
pub struct SchemaFn<F, T> {
    parse: F,
    _marker: PhantomData<fn() -> T>,
}

/// Wraps `parse` as a [`Schema`] whose errors are already flat.
///
/// # Examples
///
/// ```rust
/// use safe_action_schema::{FieldErrors, Schema, schema_fn};
///
/// let positive = schema_fn(|raw| match raw.as_u64() {
///     Some(n) if n > 0 => Ok(n),
///     _ => Err(FieldErrors::single("_root", "Expected a positive integer")),
/// });
///
/// assert_eq!(positive.safe_parse(&serde_json::json!(7)).ok(), Some(7));
/// ```
pub fn schema_fn<T, F>(parse: F) -> SchemaFn<F, T>
where
    F: Fn(&Value) -> Result<T, FieldErrors> + Send + Sync,
{
    SchemaFn {
        parse,
        _marker: PhantomData,
    }
}

impl<F: Clone, T> Clone for SchemaFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            parse: self.parse.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for SchemaFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaFn")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<F, T> Schema for SchemaFn<F, T>
where
    F: Fn(&Value) -> Result<T, FieldErrors> + Send + Sync,
    T: Send,
{
    type Output = T;
    type Error = FieldErrors;

    fn safe_parse(&self, raw: &Value) -> Result<T, FieldErrors> {
        (self.parse)(raw)
    }

    fn flatten(&self, error: &FieldErrors) -> FieldErrors {
        error.clone()
    }
}
