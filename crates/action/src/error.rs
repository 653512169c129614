use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

use safe_action_schema::FieldErrors;

use crate::response::{UNEXPECTED_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE};

/// Failure raised by a handler.
///
/// Distinguishes failures that follow the standard error convention (any
/// [`std::error::Error`]) from arbitrary non-error values. Only the former
/// contribute their message to the response; the latter map to
/// [`UNEXPECTED_ERROR_MESSAGE`].
///
/// Any `std::error::Error + Send + Sync + 'static` converts via `?`.
pub struct HandlerError {
    repr: Repr,
}

#[derive(Debug)]
enum Repr {
    Error(Box<dyn StdError + Send + Sync + 'static>),
    Opaque(String),
}

/// Plain message error behind [`HandlerError::msg`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MessageError(String);

impl HandlerError {
    /// Wraps a standard error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps an already boxed standard error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            repr: Repr::Error(error),
        }
    }

    /// Creates a standard error carrying `message`.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Wraps a value that does not follow the error convention.
    ///
    /// The value's `Debug` form is kept for diagnostics only; it never
    /// reaches the response.
    pub fn opaque(value: impl fmt::Debug) -> Self {
        Self {
            repr: Repr::Opaque(format!("{value:?}")),
        }
    }

    /// Converts a caught panic payload into an opaque failure.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let description = if let Some(s) = payload.downcast_ref::<&str>() {
            format!("panic: {s}")
        } else if let Some(s) = payload.downcast_ref::<String>() {
            format!("panic: {s}")
        } else {
            "panic with non-string payload".to_owned()
        };
        Self {
            repr: Repr::Opaque(description),
        }
    }

    /// Returns `true` if this wraps a standard error.
    pub fn is_standard(&self) -> bool {
        matches!(self.repr, Repr::Error(_))
    }

    /// The standard error's message, if there is one.
    pub fn message(&self) -> Option<String> {
        match &self.repr {
            Repr::Error(e) => Some(e.to_string()),
            Repr::Opaque(_) => None,
        }
    }

    /// Message placed in a failed response.
    pub fn response_message(&self) -> String {
        self.message().unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_owned())
    }

    /// The wrapped standard error, if any.
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.repr {
            Repr::Error(e) => Some(e.as_ref()),
            Repr::Opaque(_) => None,
        }
    }
}

impl<E> From<E> for HandlerError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Error(e) => write!(f, "{e}"),
            Repr::Opaque(value) => write!(f, "non-error value: {value}"),
        }
    }
}

impl fmt::Debug for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerError")
            .field("repr", &self.repr)
            .finish()
    }
}

/// A non-successful response viewed as an error.
///
/// Produced by [`ActionResponse::into_result`](crate::ActionResponse::into_result).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ActionFailure {
    /// The handler failed with this message.
    #[error("{0}")]
    Failed(String),

    /// The schema rejected the input.
    #[error("{}", VALIDATION_FAILED_MESSAGE)]
    Invalid(FieldErrors),
}

impl ActionFailure {
    /// Field errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Failed(_) => None,
        }
    }
}
