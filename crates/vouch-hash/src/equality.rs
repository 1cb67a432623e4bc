//! Hash-first equality checks.
//!
//! Comparing hash codes before running full equality pays off when hash codes
//! are cheap relative to `==` and collisions are rare. Correctness depends on
//! the usual contract: equal values must produce equal hash codes.

use std::hash::Hash;
use std::marker::PhantomData;

use vouch_types::{GuardError, GuardKind, GuardResult};

use crate::combine::hash_of;

/// A pluggable equality strategy, mirroring the `Hash`/`PartialEq` pair.
pub trait EqualityComparer<T> {
    /// The hash code this comparer assigns to `value`.
    fn hash_value(&self, value: &T) -> i32;

    /// Full equality under this comparer.
    fn equals(&self, first: &T, second: &T) -> bool;
}

/// The comparer backed by a type's own `Hash` and `PartialEq`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComparer<T>(PhantomData<T>);

impl<T> DefaultComparer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Hash + PartialEq> EqualityComparer<T> for DefaultComparer<T> {
    fn hash_value(&self, value: &T) -> i32 {
        hash_of(value)
    }

    fn equals(&self, first: &T, second: &T) -> bool {
        first == second
    }
}

/// Compare two values under `comparer`, checking hash codes first.
///
/// An absent comparer is a guard failure of kind [`GuardKind::Null`].
pub fn equals_with_hash_code<T, C>(
    comparer: Option<&C>,
    first: &T,
    second: &T,
) -> GuardResult<bool>
where
    C: EqualityComparer<T>,
{
    let Some(comparer) = comparer else {
        return Err(GuardError::new(
            GuardKind::Null,
            Some("comparer"),
            "comparer must not be None.",
        ));
    };
    Ok(comparer.hash_value(first) == comparer.hash_value(second)
        && comparer.equals(first, second))
}

/// Hash-first equality for optional values. Two `None`s are equal; `None`
/// never equals `Some`.
pub fn equals_opt<T: Hash + PartialEq>(value: Option<&T>, other: Option<&T>) -> bool {
    match (value, other) {
        (None, None) => true,
        (Some(value), Some(other)) => equals_value(value, other),
        _ => false,
    }
}

/// Hash-first equality for values that are always present.
pub fn equals_value<T: Hash + PartialEq>(value: &T, other: &T) -> bool {
    hash_of(value) == hash_of(other) && value == other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_compare_equal() {
        assert!(equals_value(&"same", &"same"));
        assert!(equals_value(&7u64, &7u64));
    }

    #[test]
    fn different_values_compare_unequal() {
        assert!(!equals_value(&"one", &"two"));
    }

    #[test]
    fn optional_comparison_handles_absence() {
        assert!(equals_opt::<u32>(None, None));
        assert!(!equals_opt(Some(&1u32), None));
        assert!(!equals_opt(None, Some(&1u32)));
        assert!(equals_opt(Some(&1u32), Some(&1u32)));
    }

    #[test]
    fn default_comparer_agrees_with_equals_value() {
        let comparer = DefaultComparer::new();
        assert_eq!(
            equals_with_hash_code(Some(&comparer), &"x", &"x").unwrap(),
            equals_value(&"x", &"x")
        );
    }

    #[test]
    fn absent_comparer_fails_null_kind() {
        let err = equals_with_hash_code::<u32, DefaultComparer<u32>>(None, &1, &2).unwrap_err();
        assert_eq!(err.kind(), GuardKind::Null);
        assert_eq!(err.parameter(), Some("comparer"));
    }

    #[test]
    fn custom_comparer_drives_the_outcome() {
        /// Compares lengths only.
        struct ByLength;

        impl EqualityComparer<&str> for ByLength {
            fn hash_value(&self, value: &&str) -> i32 {
                value.len() as i32
            }

            fn equals(&self, first: &&str, second: &&str) -> bool {
                first.len() == second.len()
            }
        }

        assert!(equals_with_hash_code(Some(&ByLength), &"abc", &"xyz").unwrap());
        assert!(!equals_with_hash_code(Some(&ByLength), &"abc", &"wxyz").unwrap());
    }
}
