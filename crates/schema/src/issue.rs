//! Structured validation issues.
//!
//! An [`Issue`] is one failed constraint, located by a path into the raw
//! input. [`Issues`] collects them and flattens to [`FieldErrors`] by the
//! first path segment, so `user.address.zip` and `user.name` both land
//! under `user`.

use std::borrow::Cow;
use std::fmt;

use crate::field_errors::{FieldErrors, ROOT_FIELD};

// ============================================================================
// PATH
// ============================================================================

/// One step of a path into the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key.
    Key(Cow<'static, str>),
    /// Array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&'static str> for PathSegment {
    fn from(key: &'static str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ============================================================================
// ISSUE
// ============================================================================

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value; empty for input-level issues.
    pub path: Vec<PathSegment>,
    /// Human-readable message.
    pub message: Cow<'static, str>,
}

impl Issue {
    /// Creates an issue that is not tied to a field.
    pub fn root(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Creates an issue for a top-level field.
    pub fn field(
        field: impl Into<PathSegment>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: vec![field.into()],
            message: message.into(),
        }
    }

    /// Appends a nested segment to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Dotted form of the path, e.g. `items.0.name`.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Key this issue is grouped under when flattened.
    fn flat_key(&self) -> String {
        self.path
            .first()
            .map_or_else(|| ROOT_FIELD.to_string(), ToString::to_string)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}

// ============================================================================
// ISSUES
// ============================================================================

/// Ordered collection of [`Issue`]s produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issues(Vec<Issue>);

impl Issues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue.
    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    /// Adds an issue for a top-level field.
    pub fn add(&mut self, field: impl Into<PathSegment>, message: impl Into<Cow<'static, str>>) {
        self.push(Issue::field(field, message));
    }

    /// Returns `true` if no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates issues in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    /// Groups messages by the first path segment.
    pub fn flatten(&self) -> FieldErrors {
        self.0
            .iter()
            .map(|issue| (issue.flat_key(), issue.message.to_string()))
            .collect()
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Self(vec![issue])
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("no issues"),
            [single] => write!(f, "{single}"),
            many => {
                write!(f, "{} issues: ", many.len())?;
                for (i, issue) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Issues {}
