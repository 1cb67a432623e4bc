//! Guards on slice-backed collections.
//!
//! Implemented for `Vec<T>`, `&[T]`, and arrays. Strings are deliberately
//! excluded (they would otherwise qualify through `AsRef<[u8]>` and make
//! calls ambiguous with the string guards); use `StringGuards` for those.
//! The guarded collection is returned unchanged on success.

use std::fmt::Debug;

use vouch_types::{Check, GuardKind, GuardResult};

/// Membership and size checks on slice-backed collections.
pub trait CollectionGuards<T>: Sized {
    /// The items as a slice. The one method collection types implement;
    /// every guard below is derived from it.
    fn items(&self) -> &[T];

    /// Fail with [`GuardKind::Empty`] when the collection has no items.
    fn must_not_be_empty<'a>(self, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if !self.items().is_empty() {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Empty, |subject| {
            format!("{subject} must not be an empty collection.")
        }))
    }

    /// Fail with [`GuardKind::Invalid`] when `item` is not present.
    fn must_contain<'a>(self, item: &T, check: impl Into<Check<'a>>) -> GuardResult<Self>
    where
        T: PartialEq + Debug,
    {
        if self.items().contains(item) {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must contain {item:?}, but it does not.")
        }))
    }

    /// Fail with [`GuardKind::Invalid`] when `item` is present.
    fn must_not_contain<'a>(self, item: &T, check: impl Into<Check<'a>>) -> GuardResult<Self>
    where
        T: PartialEq + Debug,
    {
        if !self.items().contains(item) {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must not contain {item:?}, but it does.")
        }))
    }

    /// Fail with [`GuardKind::Invalid`] when the collection does not hold
    /// exactly `count` items.
    fn must_have_count<'a>(self, count: usize, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        let actual = self.items().len();
        if actual == count {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must have {count} items, but it has {actual}.")
        }))
    }
}

impl<T> CollectionGuards<T> for Vec<T> {
    fn items(&self) -> &[T] {
        self
    }
}

impl<T> CollectionGuards<T> for &[T] {
    fn items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> CollectionGuards<T> for [T; N] {
    fn items(&self) -> &[T] {
        self
    }
}
