//! Guards on `Option<T>`.
//!
//! `must_not_be_none` is the workhorse: it unwraps a required value or fails
//! with a [`GuardKind::Null`] error, so required arguments can be validated
//! and bound in one step:
//!
//! ```
//! use vouch_guards::OptionGuards;
//!
//! fn connect(address: Option<String>) -> Result<(), vouch_guards::GuardError> {
//!     let address = address.must_not_be_none("address")?;
//!     assert!(!address.is_empty());
//!     Ok(())
//! }
//!
//! assert!(connect(Some("localhost:9000".into())).is_ok());
//! assert!(connect(None).is_err());
//! ```

use vouch_types::{Check, GuardKind, GuardResult};

/// Presence checks on optional values.
pub trait OptionGuards<T> {
    /// Fail with [`GuardKind::Null`] when the value is `None`; otherwise
    /// return the contained value.
    fn must_not_be_none<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<T>;

    /// Fail with [`GuardKind::Invalid`] when the value is `Some`.
    fn must_be_none<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<()>;
}

impl<T> OptionGuards<T> for Option<T> {
    fn must_not_be_none<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(check
                .into()
                .fail(GuardKind::Null, |subject| format!("{subject} must not be None."))),
        }
    }

    fn must_be_none<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<()> {
        match self {
            None => Ok(()),
            Some(_) => Err(check.into().fail(GuardKind::Invalid, |subject| {
                format!("{subject} must be None, but you specified a value.")
            })),
        }
    }
}
