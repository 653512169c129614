//! Convenience re-exports for action authors.
//!
//! ```rust,ignore
//! use safe_action::prelude::*;
//! ```

pub use crate::action::{SafeAction, create_action, create_action_with};
pub use crate::config::{ActionConfig, ExecutionMode};
pub use crate::error::HandlerError;
pub use crate::handler::Handler;
pub use crate::response::{ActionResponse, Outcome};

pub use safe_action_schema::prelude::*;
