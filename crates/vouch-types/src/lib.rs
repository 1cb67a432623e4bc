//! Foundation types for Vouch.
//!
//! This crate provides the error taxonomy and the check machinery shared by
//! every guard. The guards themselves live in `vouch-guards`; the hash
//! combination helpers live in `vouch-hash`.
//!
//! # Key Types
//!
//! - [`GuardError`] — A failed precondition check: category, parameter name,
//!   rendered message
//! - [`GuardKind`] — The closed set of failure categories
//! - [`Check`] — Optional call-site context: parameter name, message
//!   override, error override
//! - [`that`] — Arbitrary-condition check paired with a caller-constructed
//!   error

pub mod check;
pub mod error;

pub use check::{that, Check};
pub use error::{GuardError, GuardKind, GuardResult};
