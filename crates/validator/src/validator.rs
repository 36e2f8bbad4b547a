//! The validator: builder and evaluator
//!
//! A [`Validator<T>`] is a flat, ordered list of constraints over `T` plus a
//! break-first flag. It is assembled once through chained builder calls and
//! then evaluated any number of times; evaluation borrows the definition
//! immutably and returns a fresh [`Violations`] set per call, so one
//! validator can be shared across threads.
//!
//! # Evaluation policy
//!
//! - Constraints run front to back in definition order.
//! - Only the first failing rule of a field is reported. Later rules of an
//!   already-violated field are still evaluated but never recorded.
//! - With break-first enabled, the first failing rule halts the whole run,
//!   across all remaining fields.
//!
//! # Examples
//!
//! ```
//! use field_validator::prelude::*;
//!
//! struct Address {
//!     city: Option<String>,
//! }
//!
//! struct User {
//!     email: Option<String>,
//!     age: Option<u32>,
//!     address: Address,
//! }
//!
//! let address = Validator::<Address>::new()
//!     .constraint(|a: &Address| &a.city, "city", rule(not_blank(), "field.not.blank"));
//!
//! let validator = Validator::<User>::new()
//!     .constraint(|u: &User| &u.email, "email", rule(not_null(), "field.not.empty"))
//!     .constraint(
//!         |u: &User| &u.age,
//!         "age",
//!         rule(not_null(), "field.not.empty").rule(in_range(20, 30), "field.not-in.range-20-30"),
//!     )
//!     .nest(|u: &User| &u.address, "address", &address);
//!
//! let user = User {
//!     email: None,
//!     age: Some(19),
//!     address: Address { city: Some(" ".into()) },
//! };
//!
//! let violations = validator.validate(&user);
//! assert_eq!(
//!     violations.fields().collect::<Vec<_>>(),
//!     ["email", "age", "address.city"]
//! );
//! assert!(validator.reject(&user).is_err());
//! ```

use std::any::type_name;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::constraint::{Constraint, Getter};
use crate::foundation::{
    Predicate, Rejection, Rule, RuleBuilder, ValidatorError, Violation, Violations,
};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Declarative, composable validator over values of type `T`.
pub struct Validator<T: ?Sized> {
    constraints: Vec<Constraint<T>>,
    break_first: bool,
}

impl<T: ?Sized> Validator<T> {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            break_first: false,
        }
    }

    /// Alias for [`Validator::new`].
    #[must_use]
    pub fn of() -> Self {
        Self::new()
    }

    /// Sets whether evaluation halts at the first failing rule.
    ///
    /// The halt is global: once any rule fails, no later constraint of any
    /// field is evaluated in that run.
    #[must_use = "builder methods must be chained or built"]
    pub fn break_first(mut self, break_first: bool) -> Self {
        self.break_first = break_first;
        self
    }

    /// Returns true when break-first is enabled.
    pub fn is_break_first(&self) -> bool {
        self.break_first
    }

    /// Returns the number of constraints, one per rule.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if no constraint was added.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates effective field names in definition order, one entry per
    /// constraint. Nested names are qualified.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.constraints.iter().map(|c| c.field_name().as_ref())
    }
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Appends one constraint per rule of `rules`, all reading the field
    /// through `getter` and reporting under `field_name`.
    ///
    /// `getter` must return a borrow into the target. Values computed from
    /// the target (`p.email.as_deref()`, `o.items.len()`) cannot be returned
    /// by reference; check them with [`Validator::constraint_on_target`]
    /// instead.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint<R, G>(
        mut self,
        getter: G,
        field_name: impl Into<Cow<'static, str>>,
        rules: RuleBuilder<R>,
    ) -> Self
    where
        R: ?Sized + 'static,
        G: Fn(&T) -> &R + Send + Sync + 'static,
    {
        let getter: Getter<T, R> = Arc::new(getter);
        let field_name = field_name.into();
        self.constraints.extend(
            rules
                .into_iter()
                .map(|rule| Constraint::direct(Arc::clone(&getter), field_name.clone(), rule)),
        );
        self
    }

    /// Appends a single constraint evaluated against the whole target.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_target(
        mut self,
        predicate: Predicate<T>,
        field_name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let identity: Getter<T, T> = Arc::new(identity::<T>);
        self.constraints.push(Constraint::direct(
            identity,
            field_name.into(),
            Rule::new(predicate, message),
        ));
        self
    }

    /// Like [`Validator::constraint`], but only when `condition` is true.
    ///
    /// The condition is decided now, at build time. A false condition leaves
    /// the definition exactly as it was.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_when<R, G>(
        self,
        condition: bool,
        getter: G,
        field_name: impl Into<Cow<'static, str>>,
        rules: RuleBuilder<R>,
    ) -> Self
    where
        R: ?Sized + 'static,
        G: Fn(&T) -> &R + Send + Sync + 'static,
    {
        if condition {
            self.constraint(getter, field_name, rules)
        } else {
            self
        }
    }

    /// Copies every constraint of `child` under the `field_name` prefix.
    ///
    /// The copy is a snapshot: constraints added to `child` afterwards are not
    /// included. Field names are qualified once, here, as
    /// `field_name + "." + child field name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nest<R, G>(
        mut self,
        getter: G,
        field_name: impl Into<Cow<'static, str>>,
        child: &Validator<R>,
    ) -> Self
    where
        R: ?Sized + 'static,
        G: Fn(&T) -> &R + Send + Sync + 'static,
    {
        let extractor: Getter<T, R> = Arc::new(getter);
        let root = field_name.into();
        tracing::trace!(root = %root, constraints = child.len(), "nesting child validator");
        self.constraints.extend(child.constraints.iter().map(|constraint| {
            Constraint::nested(Arc::clone(&extractor), root.clone(), constraint.clone())
        }));
        self
    }

    // ------------------------------------------------------------------------
    // EVALUATION
    // ------------------------------------------------------------------------

    /// Evaluates every constraint against `instance`.
    ///
    /// Always returns normally; failed rules are reported through the
    /// returned set, never as an error.
    pub fn validate(&self, instance: &T) -> Violations {
        let mut violations = Violations::new();
        let mut violated: HashSet<&str> = HashSet::new();

        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.check(instance) {
                continue;
            }

            let field = constraint.field_name();
            if violated.insert(field.as_ref()) {
                tracing::trace!(field = %field, reason = %constraint.message(), "constraint violated");
                violations.insert(Violation::new(field.clone(), constraint.message().clone()));
            }

            if self.break_first {
                tracing::debug!(
                    field = %field,
                    skipped = self.constraints[index + 1..].len(),
                    "break-first halted evaluation"
                );
                break;
            }
        }

        tracing::debug!(
            target_type = %short_type_name::<T>(),
            constraints = self.constraints.len(),
            violations = violations.len(),
            "validation finished"
        );
        violations
    }

    /// Like [`Validator::validate`], but fails when no instance is given.
    pub fn validate_present(&self, instance: Option<&T>) -> Result<Violations, ValidatorError> {
        instance
            .map(|instance| self.validate(instance))
            .ok_or(ValidatorError::MissingTarget {
                type_name: type_name::<T>(),
            })
    }

    /// Returns true when `instance` has no violations.
    pub fn is_valid(&self, instance: &T) -> bool {
        self.validate(instance).is_empty()
    }

    /// Validates `instance` and fails with every violation found.
    pub fn reject(&self, instance: &T) -> Result<(), Rejection> {
        let violations = self.validate(instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Rejection::new(
                format!("Validation failed for object {}", short_type_name::<T>()),
                violations,
            ))
        }
    }

    /// Like [`Validator::reject`], but also fails when no instance is given.
    pub fn reject_present(&self, instance: Option<&T>) -> Result<(), ValidatorError> {
        let instance = instance.ok_or(ValidatorError::MissingTarget {
            type_name: type_name::<T>(),
        })?;
        self.reject(instance).map_err(ValidatorError::from)
    }
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Clone impl - manual because T might not be Clone
impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
            break_first: self.break_first,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("constraints", &self.constraints)
            .field("break_first", &self.break_first)
            .finish()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Starts a rule chain with one rule.
///
/// # Examples
///
/// ```
/// use field_validator::rule;
/// use field_validator::predicates::{less_than, ne, not_null};
///
/// let age = rule(not_null::<Option<u32>>(), "field.not.empty")
///     .rule(ne(20), "field.not-equal.20")
///     .rule(less_than(30), "field.not-lt.30");
/// assert_eq!(age.len(), 3);
/// ```
pub fn rule<R: ?Sized>(
    predicate: Predicate<R>,
    message: impl Into<Cow<'static, str>>,
) -> RuleBuilder<R> {
    RuleBuilder::new().rule(predicate, message)
}

fn identity<T: ?Sized>(value: &T) -> &T {
    value
}

/// `type_name` without module paths, e.g. `Vec<User>` for
/// `alloc::vec::Vec<my_app::User>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            short.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(segment.rsplit("::").next().unwrap_or_default());
    short
}

// ============================================================================
// TESTS
// ============================================================================
