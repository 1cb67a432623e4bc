//! Deterministic combination of several values' hash codes into one `i32`.
//!
//! The accumulator starts at [`FIRST_PRIME`] and folds each value in
//! left-to-right order as `hash = hash * SECOND_PRIME + hash_of(value)`, with
//! wrapping arithmetic throughout. Absent (`None`) values do not perturb the
//! accumulator, so a sequence with a `None` element hashes identically to the
//! same sequence with that element removed. Permuting the inputs changes the
//! result; that order sensitivity is intended.
//!
//! Results are deterministic for a fixed input sequence within one process:
//! each value's own hash code comes from a fresh `DefaultHasher`, which uses
//! fixed keys.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Seed for every hash combination.
pub const FIRST_PRIME: i32 = 1_322_837_333;

/// Multiplier applied to the accumulator before each value's hash is added.
pub const SECOND_PRIME: i32 = 397;

/// A single value's hash code, truncated to `i32`.
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish() as i32
}

/// The transient accumulator behind every `combine*` function.
///
/// Useful directly when the values to fold have heterogeneous types or are
/// produced incrementally:
///
/// ```
/// use vouch_hash::HashCombiner;
///
/// let mut combiner = HashCombiner::new();
/// combiner.write(&"node-7");
/// combiner.write(&42u16);
/// combiner.write_opt(None::<&bool>);
/// let code = combiner.finish();
///
/// let mut shorter = HashCombiner::new();
/// shorter.write(&"node-7");
/// shorter.write(&42u16);
/// assert_eq!(code, shorter.finish());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HashCombiner {
    hash: i32,
}

impl HashCombiner {
    /// A fresh accumulator seeded with [`FIRST_PRIME`].
    pub fn new() -> Self {
        Self { hash: FIRST_PRIME }
    }

    /// Fold one value into the accumulator.
    pub fn write<T: Hash + ?Sized>(&mut self, value: &T) {
        self.hash = self
            .hash
            .wrapping_mul(SECOND_PRIME)
            .wrapping_add(hash_of(value));
    }

    /// Fold one optional value; `None` leaves the accumulator untouched.
    pub fn write_opt<T: Hash>(&mut self, value: Option<&T>) {
        if let Some(value) = value {
            self.write(value);
        }
    }

    /// The combined hash code.
    pub fn finish(&self) -> i32 {
        self.hash
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine two independently typed optional values.
pub fn combine2<T1: Hash, T2: Hash>(value1: Option<&T1>, value2: Option<&T2>) -> i32 {
    let mut combiner = HashCombiner::new();
    combiner.write_opt(value1);
    combiner.write_opt(value2);
    combiner.finish()
}

/// Combine three independently typed optional values.
pub fn combine3<T1: Hash, T2: Hash, T3: Hash>(
    value1: Option<&T1>,
    value2: Option<&T2>,
    value3: Option<&T3>,
) -> i32 {
    let mut combiner = HashCombiner::new();
    combiner.write_opt(value1);
    combiner.write_opt(value2);
    combiner.write_opt(value3);
    combiner.finish()
}

/// Combine four independently typed optional values.
pub fn combine4<T1: Hash, T2: Hash, T3: Hash, T4: Hash>(
    value1: Option<&T1>,
    value2: Option<&T2>,
    value3: Option<&T3>,
    value4: Option<&T4>,
) -> i32 {
    let mut combiner = HashCombiner::new();
    combiner.write_opt(value1);
    combiner.write_opt(value2);
    combiner.write_opt(value3);
    combiner.write_opt(value4);
    combiner.finish()
}

/// Combine a slice of values, iterating by index.
///
/// Produces the same result as [`combine_iter`] over the same elements in the
/// same order; the indexed loop only exploits the slice's random access.
pub fn combine_slice<T: Hash>(values: &[T]) -> i32 {
    let mut combiner = HashCombiner::new();
    for index in 0..values.len() {
        combiner.write(&values[index]);
    }
    combiner.finish()
}

/// Combine any ordered sequence of values, iterating sequentially.
pub fn combine_iter<I>(values: I) -> i32
where
    I: IntoIterator,
    I::Item: Hash,
{
    let mut combiner = HashCombiner::new();
    for value in values {
        combiner.write(&value);
    }
    combiner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_combination_is_the_seed() {
        assert_eq!(HashCombiner::new().finish(), FIRST_PRIME);
        assert_eq!(combine_slice::<u8>(&[]), FIRST_PRIME);
    }

    #[test]
    fn combination_is_deterministic() {
        assert_eq!(
            combine2(Some(&"a"), Some(&17u32)),
            combine2(Some(&"a"), Some(&17u32))
        );
    }

    #[test]
    fn none_arguments_are_skipped() {
        assert_eq!(
            combine3(Some(&"a"), None::<&u32>, Some(&"b")),
            combine2(Some(&"a"), Some(&"b"))
        );
        assert_eq!(combine2(None::<&u32>, None::<&u32>), FIRST_PRIME);
    }

    #[test]
    fn arity_functions_match_the_accumulator() {
        let mut combiner = HashCombiner::new();
        combiner.write(&1u8);
        combiner.write(&2u8);
        combiner.write(&3u8);
        combiner.write(&4u8);
        assert_eq!(
            combine4(Some(&1u8), Some(&2u8), Some(&3u8), Some(&4u8)),
            combiner.finish()
        );
    }

    #[test]
    fn order_matters() {
        assert_ne!(
            combine2(Some(&"a"), Some(&"b")),
            combine2(Some(&"b"), Some(&"a"))
        );
    }

    proptest! {
        #[test]
        fn indexed_and_sequential_iteration_agree(values in prop::collection::vec(any::<u64>(), 0..32)) {
            prop_assert_eq!(combine_slice(&values), combine_iter(values.iter()));
        }

        #[test]
        fn swapping_two_distinct_values_changes_the_hash(a in any::<u64>(), b in any::<u64>()) {
            prop_assume!(a != b);
            prop_assert_ne!(combine_slice(&[a, b]), combine_slice(&[b, a]));
        }

        #[test]
        fn appending_a_value_follows_the_fold_recurrence(values in prop::collection::vec(any::<u64>(), 0..16), extra in any::<u64>()) {
            let mut extended = values.clone();
            extended.push(extra);
            prop_assert_eq!(
                combine_slice(&extended),
                combine_slice(&values)
                    .wrapping_mul(SECOND_PRIME)
                    .wrapping_add(hash_of(&extra))
            );
        }
    }
}
