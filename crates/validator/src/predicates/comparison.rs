//! Equality, membership and ordering predicates

use crate::foundation::{Nullable, Predicate};

/// Passes when the value is present and equal to `expected`.
#[must_use]
pub fn eq<V>(expected: V::Value) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialEq + Sized + Send + Sync + 'static,
{
    Predicate::new(move |value: &V| value.value() == Some(&expected))
}

/// Passes when the value is absent or differs from `expected`.
#[must_use]
pub fn ne<V>(expected: V::Value) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialEq + Sized + Send + Sync + 'static,
{
    eq(expected).negate()
}

/// Passes when the value is present and one of `allowed`.
///
/// # Examples
///
/// ```
/// use field_validator::predicates::one_of;
///
/// #[derive(PartialEq)]
/// enum Genre { Male, Female, Other }
///
/// let genre = one_of::<Option<Genre>>([Genre::Male, Genre::Female]);
/// assert!(genre.test(&Some(Genre::Female)));
/// assert!(!genre.test(&Some(Genre::Other)));
/// assert!(!genre.test(&None));
/// ```
#[must_use]
pub fn one_of<V>(allowed: impl IntoIterator<Item = V::Value>) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialEq + Sized + Send + Sync + 'static,
{
    let allowed: Vec<V::Value> = allowed.into_iter().collect();
    Predicate::new(move |value: &V| value.value().is_some_and(|v| allowed.contains(v)))
}

/// Passes when the value is present and strictly less than `bound`.
#[must_use]
pub fn less_than<V>(bound: V::Value) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialOrd + Sized + Send + Sync + 'static,
{
    Predicate::new(move |value: &V| value.value().is_some_and(|v| *v < bound))
}

/// Passes when the value is present and strictly greater than `bound`.
#[must_use]
pub fn greater_than<V>(bound: V::Value) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialOrd + Sized + Send + Sync + 'static,
{
    Predicate::new(move |value: &V| value.value().is_some_and(|v| *v > bound))
}

/// Passes when the value is present and within `min..=max`.
#[must_use]
pub fn in_range<V>(min: V::Value, max: V::Value) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: PartialOrd + Sized + Send + Sync + 'static,
{
    Predicate::new(move |value: &V| value.value().is_some_and(|v| *v >= min && *v <= max))
}

// ============================================================================
// TESTS
// ============================================================================
