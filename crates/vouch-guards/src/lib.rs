//! Guard clauses for validating function arguments.
//!
//! Each guard checks one precondition on a value: on success it returns the
//! value unchanged so checks can be chained with `?`, on failure it returns a
//! single [`GuardError`] carrying the failure category, the parameter name,
//! and a rendered message.
//!
//! ```
//! use vouch_guards::{OptionGuards, StringGuards, CompareGuards};
//!
//! fn configure(host: Option<String>, port: u16) -> Result<(String, u16), vouch_guards::GuardError> {
//!     let host = host
//!         .must_not_be_none("host")?
//!         .must_not_be_whitespace("host")?;
//!     let port = port.must_be_greater_than(1024, "port")?;
//!     Ok((host, port))
//! }
//!
//! assert!(configure(Some("db.internal".into()), 5432).is_ok());
//! assert!(configure(None, 5432).is_err());
//! assert!(configure(Some("  ".into()), 5432).is_err());
//! ```
//!
//! Call sites that need more than a parameter name pass a full
//! [`Check`]: a custom message replaces the default text verbatim, a custom
//! [`GuardError`] replaces error construction entirely.

pub mod boolean;
pub mod collection;
pub mod compare;
pub mod map;
pub mod option;
pub mod string;

pub use boolean::BoolGuards;
pub use collection::CollectionGuards;
pub use compare::CompareGuards;
pub use map::MapGuards;
pub use option::OptionGuards;
pub use string::StringGuards;

pub use vouch_types::{that, Check, GuardError, GuardKind, GuardResult};
