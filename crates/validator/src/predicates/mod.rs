//! Built-in predicate factories
//!
//! Ready-made predicates for the common checks. Every factory is generic over
//! [`Nullable`](crate::foundation::Nullable), so the same call works against
//! an `Option<T>` field and a plain `T` field.
//!
//! Absent values fail every value check (`eq`, `one_of`, ranges, string
//! checks). `ne` passes on absent values, and `not_null` / `is_null` test
//! presence itself.
//!
//! # Categories
//!
//! - **Presence**: [`not_null`], [`is_null`]
//! - **Comparison**: [`eq`], [`ne`], [`one_of`], [`less_than`],
//!   [`greater_than`], [`in_range`]
//! - **String**: [`not_blank`], [`pattern`], [`email`]
//!
//! # Examples
//!
//! ```
//! use field_validator::predicates::*;
//!
//! let age = in_range::<Option<u32>>(20, 30);
//! assert!(age.test(&Some(25)));
//! assert!(!age.test(&Some(19)));
//! assert!(!age.test(&None));
//! ```

pub mod comparison;
pub mod nullable;
pub mod string;

pub use comparison::{eq, greater_than, in_range, less_than, ne, one_of};
pub use nullable::{is_null, not_null};
pub use string::{email, not_blank, pattern};
