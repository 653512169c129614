//! Common imports for defining and adapting schemas.
//!
//! ```rust
//! use safe_action_schema::prelude::*;
//! ```

pub use crate::adapters::{SerdeSchema, schema_fn};
pub use crate::field_errors::FieldErrors;
pub use crate::issue::{Issue, Issues};
pub use crate::traits::{AsyncSchema, Schema};
