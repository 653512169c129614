//! # safe-action
//!
//! Validated async actions with a uniform response shape.
//!
//! A safe action wraps a schema and an async handler into one callable.
//! Raw input goes through the schema first; only accepted input reaches the
//! handler. Whatever happens, the caller gets an [`ActionResponse`] back and
//! branches on its shape instead of handling errors.
//!
//! ## Core Types
//!
//! - [`SafeAction`]: the composed callable, built by [`create_action`]
//! - [`ActionResponse`]: exactly one of succeeded, failed or invalid, plus timing
//! - [`Handler`]: business logic over validated input; async closures qualify
//! - [`HandlerError`]: what a handler may fail with
//! - [`ActionConfig`]: execution mode and duration tracking
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_action::prelude::*;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Deserialize)]
//! struct UpdateUser { id: String, name: String }
//!
//! let update_user = create_action(
//!     SerdeSchema::<UpdateUser>::new().refine(
//!         "name",
//!         |u| u.name.chars().count() >= 3,
//!         "Name should be at least 3 characters long",
//!     ),
//!     |user: UpdateUser| async move {
//!         Ok::<_, HandlerError>(json!({ "success": true, "updatedName": user.name }))
//!     },
//! );
//!
//! let response = update_user.invoke(json!({ "id": "1", "name": "Ali" })).await;
//! assert!(response.is_success());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// The schema-plus-handler wrapper.
pub mod action;
/// Execution mode and per-action switches.
pub mod config;
/// Handler failures and non-successful responses as errors.
pub mod error;
/// Business-logic handler trait.
pub mod handler;
/// Convenience re-exports for action authors.
pub mod prelude;
/// The normalized response type.
pub mod response;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use action::{SafeAction, create_action, create_action_with};
pub use config::{ActionConfig, ExecutionMode};
pub use error::{ActionFailure, HandlerError};
pub use handler::Handler;
pub use response::{
    ActionResponse, Outcome, ResponseMetadata, UNEXPECTED_ERROR_MESSAGE,
    VALIDATION_FAILED_MESSAGE,
};

// Re-export the schema side so action authors need a single dependency.
pub use safe_action_schema as schema;
pub use safe_action_schema::{AsyncSchema, FieldErrors, Schema};
