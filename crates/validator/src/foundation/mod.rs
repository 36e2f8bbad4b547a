//! Foundation types
//!
//! The building blocks every other module is written against:
//!
//! - **Predicates**: [`Predicate`], [`Nullable`]
//! - **Rules**: [`Rule`], [`RuleBuilder`]
//! - **Results**: [`Violation`], [`Violations`]
//! - **Errors**: [`Rejection`], [`ValidatorError`]
//!
//! # Examples
//!
//! ```
//! use field_validator::foundation::{Predicate, RuleBuilder};
//!
//! let rules = RuleBuilder::builder()
//!     .rule(Predicate::new(|s: &str| !s.is_empty()), "field.not.empty")
//!     .rule(Predicate::new(|s: &str| s.len() <= 32), "field.too.long");
//! assert_eq!(rules.len(), 2);
//! ```

pub mod error;
pub mod predicate;
pub mod rule;
pub mod violation;

pub use error::{Rejection, ValidatorError};
pub use predicate::{Nullable, Predicate};
pub use rule::{Rule, RuleBuilder};
pub use violation::{Violation, Violations};
