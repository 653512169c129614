use std::time::Duration;

use safe_action_schema::FieldErrors;
use serde::{Serialize, Serializer};

use crate::error::ActionFailure;

/// Message carried by every response whose input failed validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";

/// Message used when a handler fails with something that is not an error.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Which of the three mutually exclusive states a response is in.
///
/// The invoker matches on this to decide what to show:
/// - `Succeeded` → render `data`
/// - `Failed` → show the handler's message
/// - `Invalid` → highlight the offending fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Input was valid and the handler returned a value.
    Succeeded {
        /// The handler's return value.
        data: T,
    },

    /// Input was valid but the handler failed.
    Failed {
        /// Human-readable failure message.
        error: String,
    },

    /// Input was rejected by the schema; the handler never ran.
    Invalid {
        /// Per-field messages as flattened by the schema.
        validation_errors: FieldErrors,
    },
}

/// Timing captured around one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Wall-clock time from the start of validation to response construction.
    pub duration: Duration,
}

/// The normalized, panic-free result of running a safe action.
///
/// Constructed fresh per invocation and never mutated afterwards.
///
/// Serializes to the wire shape
/// `{ data?, error, validationErrors?, metadata?: { duration } }`, where
/// `error` is written as `null` on success and `duration` is whole
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ActionResponse<T> {
    outcome: Outcome<T>,
    metadata: Option<ResponseMetadata>,
}

// ── Constructors ────────────────────────────────────────────────────────────

impl<T> ActionResponse<T> {
    /// Successful response carrying the handler's value.
    pub fn succeeded(data: T) -> Self {
        Self::from_outcome(Outcome::Succeeded { data })
    }

    /// Failed response carrying the handler's message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::Failed {
            error: error.into(),
        })
    }

    /// Invalid response carrying the schema's field errors.
    pub fn invalid(validation_errors: FieldErrors) -> Self {
        Self::from_outcome(Outcome::Invalid { validation_errors })
    }

    fn from_outcome(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            metadata: None,
        }
    }

    /// Attaches timing metadata.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.metadata = Some(ResponseMetadata { duration });
        self
    }
}

// ── Accessors ───────────────────────────────────────────────────────────────

impl<T> ActionResponse<T> {
    /// The state this response is in.
    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Consumes the response, returning its state.
    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }

    /// Returns `true` if the handler produced a value.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded { .. })
    }

    /// Returns `true` if the handler failed.
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Returns `true` if the schema rejected the input.
    pub fn is_invalid(&self) -> bool {
        matches!(self.outcome, Outcome::Invalid { .. })
    }

    /// The handler's value, if it succeeded.
    pub fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Succeeded { data } => Some(data),
            _ => None,
        }
    }

    /// Consumes the response, returning the handler's value if it succeeded.
    pub fn into_data(self) -> Option<T> {
        match self.outcome {
            Outcome::Succeeded { data } => Some(data),
            _ => None,
        }
    }

    /// The error message; `None` exactly when the response succeeded.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Succeeded { .. } => None,
            Outcome::Failed { error } => Some(error),
            Outcome::Invalid { .. } => Some(VALIDATION_FAILED_MESSAGE),
        }
    }

    /// Field errors, if the schema rejected the input.
    pub fn validation_errors(&self) -> Option<&FieldErrors> {
        match &self.outcome {
            Outcome::Invalid { validation_errors } => Some(validation_errors),
            _ => None,
        }
    }

    /// Timing metadata, if recorded.
    pub fn metadata(&self) -> Option<&ResponseMetadata> {
        self.metadata.as_ref()
    }

    /// Recorded duration, if any.
    pub fn duration(&self) -> Option<Duration> {
        self.metadata.map(|m| m.duration)
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, ActionFailure> {
        match self.outcome {
            Outcome::Succeeded { data } => Ok(data),
            Outcome::Failed { error } => Err(ActionFailure::Failed(error)),
            Outcome::Invalid { validation_errors } => Err(ActionFailure::Invalid(validation_errors)),
        }
    }
}

// ── Wire form ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Wire<'a, T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_errors: Option<&'a FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<WireMetadata>,
}

#[derive(Serialize)]
struct WireMetadata {
    duration: u64,
}

impl<T: Serialize> Serialize for ActionResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Wire {
            data: self.data(),
            error: self.error(),
            validation_errors: self.validation_errors(),
            metadata: self.metadata.map(|m| WireMetadata {
                duration: m.duration.as_millis() as u64,
            }),
        }
        .serialize(serializer)
    }
}
