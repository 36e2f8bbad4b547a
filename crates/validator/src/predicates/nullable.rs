//! Presence predicates

use crate::foundation::{Nullable, Predicate};

/// Passes when the value is present.
///
/// # Examples
///
/// ```
/// use field_validator::predicates::not_null;
///
/// let required = not_null::<Option<String>>();
/// assert!(required.test(&Some(String::new())));
/// assert!(!required.test(&None));
/// ```
#[must_use]
pub fn not_null<V>() -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
{
    Predicate::new(|value: &V| value.value().is_some())
}

/// Passes when the value is absent.
#[must_use]
pub fn is_null<V>() -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
{
    Predicate::new(|value: &V| value.value().is_none())
}
