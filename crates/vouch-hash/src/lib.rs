//! Hash combination and hash-first equality for Vouch.
//!
//! Folds several values' hash codes into one `i32` using a fixed seed and
//! multiplier, in input order, with wrapping arithmetic. Fixed-arity forms
//! cover two to four values; `combine_slice`/`combine_iter` cover ordered
//! sequences; [`HashCombiner`] is the accumulator underneath all of them.
//!
//! ```
//! use vouch_hash::{combine2, combine3};
//!
//! let id = combine2(Some(&"host"), Some(&8080u16));
//! // None contributes nothing, so arities mix freely.
//! assert_eq!(id, combine3(Some(&"host"), None::<&bool>, Some(&8080u16)));
//! ```

pub mod combine;
pub mod equality;

pub use combine::{
    combine2, combine3, combine4, combine_iter, combine_slice, hash_of, HashCombiner,
    FIRST_PRIME, SECOND_PRIME,
};
pub use equality::{
    equals_opt, equals_value, equals_with_hash_code, DefaultComparer, EqualityComparer,
};
