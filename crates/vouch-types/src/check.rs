//! The call-site options every guard accepts and the single failure path.
//!
//! A [`Check`] bundles the three optional inputs a guard call can carry: the
//! parameter name (used for default message construction), a replacement
//! message, and a replacement error. Guards accept `impl Into<Check>` as their
//! final argument, so a bare `&str` parameter name works at most call sites:
//!
//! ```
//! use vouch_types::{Check, GuardError, GuardKind};
//!
//! fn must_be_positive<'a>(value: i64, check: impl Into<Check<'a>>) -> Result<i64, GuardError> {
//!     if value > 0 {
//!         return Ok(value);
//!     }
//!     Err(check.into().fail(GuardKind::Invalid, |subject| {
//!         format!("{subject} must be positive, but you specified {value}.")
//!     }))
//! }
//!
//! assert!(must_be_positive(3, "count").is_ok());
//! let err = must_be_positive(-1, "count").unwrap_err();
//! assert_eq!(err.message(), "count must be positive, but you specified -1.");
//! ```

use crate::error::{GuardError, GuardKind, GuardResult};

/// Subject used in default messages when no parameter name was supplied.
const ANONYMOUS_SUBJECT: &str = "The value";

/// Optional call-site context for a guard: parameter name, message override,
/// error override.
///
/// All three default to absent. An error override wins over a message
/// override, which wins over the guard's default template.
#[derive(Clone, Debug, Default)]
pub struct Check<'a> {
    parameter: Option<&'a str>,
    message: Option<&'a str>,
    error: Option<GuardError>,
}

impl<'a> Check<'a> {
    /// A check carrying only a parameter name.
    pub fn named(parameter: &'a str) -> Self {
        Self {
            parameter: Some(parameter),
            ..Self::default()
        }
    }

    /// Replace the default message text verbatim. The failure category is
    /// unchanged.
    pub fn with_message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Replace error construction entirely: on failure this exact instance is
    /// returned and no message is built.
    pub fn with_error(mut self, error: GuardError) -> Self {
        self.error = Some(error);
        self
    }

    /// The parameter name, if one was supplied.
    pub fn parameter(&self) -> Option<&'a str> {
        self.parameter
    }

    /// The subject for default messages: the parameter name, or
    /// `"The value"` when none was given.
    pub fn subject(&self) -> &str {
        self.parameter.unwrap_or(ANONYMOUS_SUBJECT)
    }

    /// Build the error for a failed check.
    ///
    /// The default message is built lazily, so a supplied override costs no
    /// formatting. Guards call this only on their failure path.
    pub fn fail(self, kind: GuardKind, default_message: impl FnOnce(&str) -> String) -> GuardError {
        if let Some(error) = self.error {
            return error;
        }
        let message = match self.message {
            Some(text) => text.to_string(),
            None => default_message(self.subject()),
        };
        GuardError::new(kind, self.parameter, message)
    }
}

impl<'a> From<&'a str> for Check<'a> {
    fn from(parameter: &'a str) -> Self {
        Check::named(parameter)
    }
}

impl<'a> From<Option<&'a str>> for Check<'a> {
    fn from(parameter: Option<&'a str>) -> Self {
        Check {
            parameter,
            ..Check::default()
        }
    }
}

/// Check an arbitrary condition against a caller-constructed error.
///
/// Returns `Ok(())` when `condition` is true. When it is false, the factory
/// is invoked and its error returned. An absent factory is itself a guard
/// failure of kind [`GuardKind::Null`], regardless of the condition.
pub fn that<F>(condition: bool, error: Option<F>) -> GuardResult<()>
where
    F: FnOnce() -> GuardError,
{
    let Some(error) = error else {
        return Err(GuardError::new(
            GuardKind::Null,
            Some("error"),
            "error must not be None.",
        ));
    };
    if condition {
        Ok(())
    } else {
        Err(error())
    }
}
