//! Guards on ordered values.
//!
//! Blanket-implemented for any `PartialOrd + Debug` type, which covers the
//! numeric types as well as anything with a derived ordering. All failures
//! are [`GuardKind::Invalid`].

use std::fmt::Debug;
use std::ops::Range;

use vouch_types::{Check, GuardKind, GuardResult};

/// Boundary and range checks on ordered values.
pub trait CompareGuards: PartialOrd + Debug + Sized {
    /// Fail unless `self > boundary`.
    fn must_be_greater_than<'a>(self, boundary: Self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self > boundary {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must be greater than {boundary:?}, but you specified {self:?}.")
        }))
    }

    /// Fail unless `self < boundary`.
    fn must_be_less_than<'a>(self, boundary: Self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self < boundary {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must be less than {boundary:?}, but you specified {self:?}.")
        }))
    }

    /// Fail unless `self >= boundary`.
    fn must_not_be_less_than<'a>(self, boundary: Self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self >= boundary {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must not be less than {boundary:?}, but you specified {self:?}.")
        }))
    }

    /// Fail unless `self <= boundary`.
    fn must_not_be_greater_than<'a>(self, boundary: Self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self <= boundary {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must not be greater than {boundary:?}, but you specified {self:?}.")
        }))
    }

    /// Fail unless `self` lies within the half-open `range`.
    fn must_be_in<'a>(self, range: Range<Self>, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if range.contains(&self) {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must be within {range:?}, but you specified {self:?}.")
        }))
    }
}

impl<T: PartialOrd + Debug> CompareGuards for T {}
