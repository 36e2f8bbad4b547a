//! Violations reported by a validation run
//!
//! A [`Violation`] is a plain `(field, message)` value. [`Violations`] is the
//! insertion-ordered, deduplicating set a single `validate` call returns.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexSet;

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed rule, reported under its (possibly qualified) field name.
///
/// Compared and hashed by value: two violations with the same field and
/// message are the same violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    field: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the field name, e.g. `"email"` or `"address.city"`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the message of the rule that failed.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ============================================================================
// VIOLATION SET
// ============================================================================

/// The result of one validation run.
///
/// Iteration follows insertion order, which is the order fields first
/// violated during evaluation. Equality is set equality and ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Violations {
    set: IndexSet<Violation>,
}

impl Violations {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a violation. Returns false if an equal one was already present.
    pub fn insert(&mut self, violation: Violation) -> bool {
        self.set.insert(violation)
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true when validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterates violations in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Violation> {
        self.set.iter()
    }

    /// Returns true if an equal violation is present.
    #[must_use]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.set.contains(violation)
    }

    /// Returns the first violation recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Violation> {
        self.set.iter().find(|v| v.field() == field)
    }

    /// Returns the violation recorded first.
    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.set.first()
    }

    /// Iterates the violating field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(Violation::field)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Violations> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.set.len())?;
        for (i, violation) in self.set.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for Violations {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.set.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = indexmap::set::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = indexmap::set::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}
