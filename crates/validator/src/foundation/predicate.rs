//! Predicates and nullability
//!
//! A [`Predicate`] is the smallest unit of truth in the crate: a unary,
//! side-effect-free test over a borrowed value. Rules pair a predicate with a
//! message; constraints bind rules to fields.
//!
//! Absence is modelled with `Option<T>`. The [`Nullable`] trait lets one
//! predicate factory work against both `Option<u32>` and `u32` fields.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// PREDICATE
// ============================================================================

/// A thread-safe, cheaply clonable unary predicate.
///
/// Cloning shares the underlying closure, so a predicate can be reused across
/// many rules and validators without reallocating.
///
/// # Examples
///
/// ```
/// use field_validator::Predicate;
///
/// let even = Predicate::new(|n: &u32| n % 2 == 0);
/// let small = Predicate::new(|n: &u32| *n < 10);
/// let both = even.and(small);
///
/// assert!(both.test(&4));
/// assert!(!both.test(&12));
/// ```
pub struct Predicate<R: ?Sized> {
    test: Arc<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R: ?Sized> Predicate<R> {
    /// Wraps a closure or function as a predicate.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self { test: Arc::new(f) }
    }

    /// Evaluates the predicate against `value`.
    #[inline]
    pub fn test(&self, value: &R) -> bool {
        (self.test)(value)
    }
}

impl<R: ?Sized + 'static> Predicate<R> {
    /// Logical AND. `other` is only evaluated when `self` passes.
    #[must_use = "builder methods must be chained or built"]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Logical OR. `other` is only evaluated when `self` fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Logical NOT.
    #[must_use = "builder methods must be chained or built"]
    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }
}

// Clone impl - manual because R might not be Clone
impl<R: ?Sized> Clone for Predicate<R> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<R: ?Sized> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("test", &"<function>")
            .finish()
    }
}

// ============================================================================
// NULLABLE
// ============================================================================

/// A value that may be absent.
///
/// `Option<T>` is absent when `None`; every other implementor is always
/// present. Predicate factories in [`crate::predicates`] are written against
/// this trait, so `not_null()` on a plain `u32` field simply always passes.
pub trait Nullable {
    /// The type of the present value.
    type Value: ?Sized;

    /// Returns the present value, or `None` when absent.
    fn value(&self) -> Option<&Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl Nullable for str {
    type Value = str;

    #[inline]
    fn value(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T> Nullable for Vec<T> {
    type Value = Self;

    #[inline]
    fn value(&self) -> Option<&Self> {
        Some(self)
    }
}

macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nullable for $ty {
                type Value = $ty;

                #[inline]
                fn value(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )+
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
