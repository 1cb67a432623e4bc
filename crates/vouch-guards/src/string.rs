//! Guards on string values.
//!
//! The trait is blanket-implemented for anything that derefs to `str`, so the
//! same calls work on `&str` and `String`. Every guard returns the value it
//! was called on, unchanged, to support chaining:
//!
//! ```
//! use vouch_guards::StringGuards;
//!
//! let name = "release/v1.2"
//!     .must_not_be_empty("name")?
//!     .must_start_with("release/", "name")?;
//! assert_eq!(name, "release/v1.2");
//! # Ok::<(), vouch_guards::GuardError>(())
//! ```
//!
//! All comparisons are case-sensitive.

use vouch_types::{Check, GuardKind, GuardResult};

/// Content checks on string values.
pub trait StringGuards: AsRef<str> + Sized {
    /// Fail with [`GuardKind::Empty`] when the string is empty.
    fn must_not_be_empty<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if !self.as_ref().is_empty() {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Empty, |subject| {
            format!("{subject} must not be an empty string.")
        }))
    }

    /// Fail with [`GuardKind::Empty`] when the string is empty and with
    /// [`GuardKind::WhitespaceOnly`] when it is non-empty but contains only
    /// whitespace characters.
    fn must_not_be_whitespace<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        let text = self.as_ref();
        if text.is_empty() {
            return Err(check.into().fail(GuardKind::Empty, |subject| {
                format!("{subject} must not be an empty string.")
            }));
        }
        if text.chars().all(char::is_whitespace) {
            return Err(check.into().fail(GuardKind::WhitespaceOnly, |subject| {
                format!("{subject} must not contain only whitespace, but you specified {text:?}.")
            }));
        }
        Ok(self)
    }

    /// Fail with [`GuardKind::StringMismatch`] when the string does not start
    /// with `text`.
    fn must_start_with<'a>(self, text: &str, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self.as_ref().starts_with(text) {
            return Ok(self);
        }
        let value = self.as_ref();
        Err(check.into().fail(GuardKind::StringMismatch, |subject| {
            format!("{subject} must start with \"{text}\", but you specified {value}.")
        }))
    }

    /// Fail with [`GuardKind::StringMismatch`] when the string does not end
    /// with `text`.
    fn must_end_with<'a>(self, text: &str, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self.as_ref().ends_with(text) {
            return Ok(self);
        }
        let value = self.as_ref();
        Err(check.into().fail(GuardKind::StringMismatch, |subject| {
            format!("{subject} must end with \"{text}\", but you specified {value}.")
        }))
    }

    /// Fail with [`GuardKind::StringMismatch`] when the string does not
    /// contain `text`.
    fn must_contain<'a>(self, text: &str, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self.as_ref().contains(text) {
            return Ok(self);
        }
        let value = self.as_ref();
        Err(check.into().fail(GuardKind::StringMismatch, |subject| {
            format!("{subject} must contain \"{text}\", but you specified {value}.")
        }))
    }

    /// Fail with [`GuardKind::StringMismatch`] when the string contains
    /// `text`.
    fn must_not_contain<'a>(self, text: &str, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if !self.as_ref().contains(text) {
            return Ok(self);
        }
        let value = self.as_ref();
        Err(check.into().fail(GuardKind::StringMismatch, |subject| {
            format!("{subject} must not contain \"{text}\", but you specified {value}.")
        }))
    }

    /// Fail with [`GuardKind::Invalid`] when the string's byte length is not
    /// exactly `length`.
    fn must_have_length<'a>(self, length: usize, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        let actual = self.as_ref().len();
        if actual == length {
            return Ok(self);
        }
        let value = self.as_ref();
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must have length {length}, but you specified {value} (length {actual}).")
        }))
    }
}

impl<S: AsRef<str>> StringGuards for S {}
