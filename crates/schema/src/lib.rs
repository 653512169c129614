//! # safe-action-schema
//!
//! The validation side of a safe action: what a schema must be able to do,
//! and the per-field error shape every schema reduces to.
//!
//! ## Core Types
//!
//! - [`Schema`] / [`AsyncSchema`]: parse raw JSON into a typed value without panicking
//! - [`FieldErrors`]: field name to ordered messages, the flattened error form
//! - [`Issue`] / [`Issues`]: path-addressed errors produced by the bundled adapters
//! - [`SerdeSchema`]: `Deserialize` for shape, refinement checks for constraints
//! - [`SchemaFn`]: closure adapter for schemas that already speak [`FieldErrors`]
//!
//! Defining the constraints themselves is left to whichever validation
//! library sits behind the trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Ready-made schema implementations.
pub mod adapters;
/// Flattened per-field messages.
pub mod field_errors;
/// Path-addressed validation issues.
pub mod issue;
/// Convenience re-exports for schema authors.
pub mod prelude;
/// Sync and async schema traits.
pub mod traits;

pub use adapters::{REQUIRED_MESSAGE, SchemaFn, SerdeSchema, schema_fn};
pub use field_errors::{FieldErrors, ROOT_FIELD};
pub use issue::{Issue, Issues, PathSegment};
pub use traits::{AsyncSchema, Schema};
