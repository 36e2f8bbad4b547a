//! Prelude module for convenient imports.
//!
//! Provides a single `use field_validator::prelude::*;` import that brings
//! in the validator, rule builders, result types and every built-in
//! predicate.
//!
//! # Examples
//!
//! ```
//! use field_validator::prelude::*;
//!
//! let name = Validator::<str>::new().constraint_on_target(not_blank(), "name", "field.not.blank");
//! assert!(name.is_valid("Ann"));
//! ```

// ============================================================================
// FOUNDATION: Predicates, rules, results, errors
// ============================================================================

pub use crate::foundation::{
    Nullable, Predicate, Rejection, Rule, RuleBuilder, ValidatorError, Violation, Violations,
};

// ============================================================================
// VALIDATOR
// ============================================================================

pub use crate::validator::{Validator, rule};

// ============================================================================
// PREDICATES AND COMBINATORS
// ============================================================================

pub use crate::combinators::{all_of, any_of, not};
pub use crate::predicates::*;

pub use crate::rules;
