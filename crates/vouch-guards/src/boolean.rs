//! Guards on `bool`.

use vouch_types::{Check, GuardKind, GuardResult};

/// Checks on boolean flags.
pub trait BoolGuards: Sized {
    /// Fail with [`GuardKind::Invalid`] when the value is `false`.
    fn must_not_be_false<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<bool>;

    /// Fail with [`GuardKind::Invalid`] when the value is `true`.
    fn must_not_be_true<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<bool>;
}

impl BoolGuards for bool {
    fn must_not_be_false<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<bool> {
        if self {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must not be false, but you specified false.")
        }))
    }

    fn must_not_be_true<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<bool> {
        if !self {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must not be true, but you specified true.")
        }))
    }
}
