//! Predicate combinators
//!
//! Free-function forms of [`Predicate::and`], [`Predicate::or`] and
//! [`Predicate::negate`], plus n-ary versions for composing lists.
//!
//! # Examples
//!
//! ```
//! use field_validator::combinators::{any_of, not};
//! use field_validator::predicates::{eq, is_null};
//!
//! // absent, or exactly "n/a"
//! let placeholder = any_of([is_null::<Option<String>>(), eq("n/a".to_string())]);
//! assert!(placeholder.test(&None));
//! assert!(placeholder.test(&Some("n/a".into())));
//! assert!(not(placeholder).test(&Some("Ann".into())));
//! ```

use crate::foundation::Predicate;

/// Passes when every predicate passes. Stops at the first failure.
///
/// An empty list passes.
#[must_use]
pub fn all_of<R>(predicates: impl IntoIterator<Item = Predicate<R>>) -> Predicate<R>
where
    R: ?Sized + 'static,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value: &R| predicates.iter().all(|p| p.test(value)))
}

/// Passes when at least one predicate passes. Stops at the first success.
///
/// An empty list fails.
#[must_use]
pub fn any_of<R>(predicates: impl IntoIterator<Item = Predicate<R>>) -> Predicate<R>
where
    R: ?Sized + 'static,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value: &R| predicates.iter().any(|p| p.test(value)))
}

/// Passes when `predicate` fails.
#[must_use]
pub fn not<R>(predicate: Predicate<R>) -> Predicate<R>
where
    R: ?Sized + 'static,
{
    predicate.negate()
}

/// Passes when both pass.
#[must_use]
pub fn and<R>(left: Predicate<R>, right: Predicate<R>) -> Predicate<R>
where
    R: ?Sized + 'static,
{
    left.and(right)
}

/// Passes when either passes.
#[must_use]
pub fn or<R>(left: Predicate<R>, right: Predicate<R>) -> Predicate<R>
where
    R: ?Sized + 'static,
{
    left.or(right)
}
