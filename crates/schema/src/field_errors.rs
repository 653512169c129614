//! Per-field validation messages.
//!
//! [`FieldErrors`] is the flattened form every schema hands back to the
//! action wrapper: field name to an ordered list of human-readable messages.
//! Field order is the order in which a field first received a message.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key under which messages that do not belong to a specific field are stored.
pub const ROOT_FIELD: &str = "_root";

/// Mapping from field name to the messages reported for it.
///
/// # Examples
///
/// ```rust
/// use safe_action_schema::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("name", "Name should be at least 3 characters long");
/// errors.push("name", "Name must not contain digits");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get("name").map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single message for `field`.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Appends a message to `field`, creating the entry if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Appends a message that is not tied to any field.
    pub fn push_root(&mut self, message: impl Into<String>) {
        self.push(ROOT_FIELD, message);
    }

    /// Merges `other` into `self`, keeping per-field message order.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Messages reported for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields with messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterates fields in first-reported order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consumes the set, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl<K, M> FromIterator<(K, M)> for FieldErrors
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.push(field, message);
        }
        errors
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
