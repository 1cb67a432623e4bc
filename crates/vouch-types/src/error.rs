use std::fmt;

use thiserror::Error;

/// The closed set of guard failure categories.
///
/// Every guard documents which kind it produces on failure, so callers can
/// match on the category they care about and let the rest propagate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardKind {
    /// A required value, sequence, or comparer was absent (`None`).
    Null,
    /// A generic precondition failed (e.g. a boolean that must be true).
    Invalid,
    /// A collection or string was empty.
    Empty,
    /// A string contained only whitespace.
    WhitespaceOnly,
    /// A string did not start with, end with, or contain the expected text.
    StringMismatch,
    /// A map contained a forbidden key.
    KeyConflict,
    /// A caller-supplied error raised verbatim.
    Custom,
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuardKind::Null => "null",
            GuardKind::Invalid => "invalid",
            GuardKind::Empty => "empty",
            GuardKind::WhitespaceOnly => "whitespace-only",
            GuardKind::StringMismatch => "string-mismatch",
            GuardKind::KeyConflict => "key-conflict",
            GuardKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A failed precondition check.
///
/// Carries the failure category, the name of the offending parameter (when the
/// call site supplied one), and a rendered, display-ready message. Constructed
/// only at the moment a check fails; a passing guard never allocates one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GuardError {
    kind: GuardKind,
    parameter: Option<String>,
    message: String,
}

impl GuardError {
    /// Create an error with an explicit category and message.
    pub fn new(
        kind: GuardKind,
        parameter: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            parameter: parameter.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create a caller-defined error that guards raise verbatim.
    pub fn custom(message: impl Into<String>) -> Self {
        Self {
            kind: GuardKind::Custom,
            parameter: None,
            message: message.into(),
        }
    }

    /// The failure category.
    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    /// The name of the offending parameter, if the call site supplied one.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias for guard results.
pub type GuardResult<T> = Result<T, GuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_message() {
        let err = GuardError::new(GuardKind::Invalid, Some("count"), "count must be positive.");
        assert_eq!(err.to_string(), "count must be positive.");
    }

    #[test]
    fn accessors_expose_all_fields() {
        let err = GuardError::new(GuardKind::Empty, Some("items"), "items must not be empty.");
        assert_eq!(err.kind(), GuardKind::Empty);
        assert_eq!(err.parameter(), Some("items"));
        assert_eq!(err.message(), "items must not be empty.");
    }

    #[test]
    fn custom_errors_have_custom_kind_and_no_parameter() {
        let err = GuardError::custom("something else entirely");
        assert_eq!(err.kind(), GuardKind::Custom);
        assert_eq!(err.parameter(), None);
    }

    #[test]
    fn equality_is_structural() {
        let a = GuardError::new(GuardKind::Null, Some("x"), "x must not be None.");
        let b = GuardError::new(GuardKind::Null, Some("x"), "x must not be None.");
        assert_eq!(a, b);
    }
}
