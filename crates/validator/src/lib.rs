//! # field-validator
//!
//! Declarative, composable field validation.
//!
//! Describe, per field of a type, an ordered chain of named rules
//! (predicate + message), compose sub-object validators under a field
//! prefix, then evaluate against any number of instances.
//!
//! ## Quick Start
//!
//! ```
//! use field_validator::prelude::*;
//!
//! struct Signup {
//!     email: Option<String>,
//!     name: String,
//! }
//!
//! let validator = Validator::<Signup>::new()
//!     .constraint(
//!         |s: &Signup| &s.email,
//!         "email",
//!         rule(not_null(), "field.not.empty").rule(email(), "field.not.valid"),
//!     )
//!     .constraint(|s: &Signup| &s.name, "name", rule(not_blank(), "field.not.blank"));
//!
//! let signup = Signup { email: Some("nope".into()), name: "Ann".into() };
//! let violations = validator.validate(&signup);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations.get("email").map(Violation::message), Some("field.not.valid"));
//! ```
//!
//! ## Evaluation Rules
//!
//! - Constraints are evaluated in definition order.
//! - A field is reported at most once, with the message of its first
//!   failing rule.
//! - [`Validator::break_first`] halts the whole run at the first failure.
//! - Nested validators report under `root.inner` field names.
//!
//! ## Built-in Predicates
//!
//! - **Presence**: [`not_null`](predicates::not_null), [`is_null`](predicates::is_null)
//! - **Comparison**: [`eq`](predicates::eq), [`ne`](predicates::ne),
//!   [`one_of`](predicates::one_of), [`less_than`](predicates::less_than),
//!   [`greater_than`](predicates::greater_than), [`in_range`](predicates::in_range)
//! - **String**: [`not_blank`](predicates::not_blank), [`pattern`](predicates::pattern),
//!   [`email`](predicates::email)

pub mod combinators;
mod constraint;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod validator;

pub use foundation::{
    Nullable, Predicate, Rejection, Rule, RuleBuilder, ValidatorError, Violation, Violations,
};
pub use validator::{Validator, rule};
