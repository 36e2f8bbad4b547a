//! Rules and rule chains
//!
//! A [`Rule`] pairs a [`Predicate`] with the message reported when it fails.
//! A [`RuleBuilder`] accumulates the ordered chain of rules destined for one
//! field; the order rules are added is the order they are evaluated in.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Predicate;

// ============================================================================
// RULE
// ============================================================================

/// An immutable predicate + message pair.
///
/// Messages are usually static identifiers such as `"field.not.empty"`, so
/// they are stored as `Cow<'static, str>` and only allocate when built at
/// runtime.
pub struct Rule<R: ?Sized> {
    predicate: Predicate<R>,
    message: Cow<'static, str>,
}

impl<R: ?Sized> Rule<R> {
    /// Creates a rule.
    pub fn new(predicate: Predicate<R>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    /// Returns the predicate.
    pub fn predicate(&self) -> &Predicate<R> {
        &self.predicate
    }

    /// Returns the message reported on failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates the rule's predicate against `value`.
    #[inline]
    pub fn test(&self, value: &R) -> bool {
        self.predicate.test(value)
    }

    pub(crate) fn into_parts(self) -> (Predicate<R>, Cow<'static, str>) {
        (self.predicate, self.message)
    }
}

impl<R: ?Sized> Clone for Rule<R> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            message: self.message.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RULE BUILDER
// ============================================================================

/// Ordered accumulator of rules for a single field.
///
/// # Examples
///
/// ```
/// use field_validator::RuleBuilder;
/// use field_validator::predicates::{in_range, not_null};
///
/// let age = RuleBuilder::<Option<u32>>::builder()
///     .rule(not_null(), "field.not.empty")
///     .rule(in_range(20, 30), "field.not-in.range-20-30");
/// assert_eq!(age.len(), 2);
/// ```
pub struct RuleBuilder<R: ?Sized> {
    rules: Vec<Rule<R>>,
}

impl<R: ?Sized> RuleBuilder<R> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Alias for [`RuleBuilder::new`], reads better at the head of a chain.
    #[must_use]
    pub fn builder() -> Self {
        Self::new()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, predicate: Predicate<R>, message: impl Into<Cow<'static, str>>) -> Self {
        self.rules.push(Rule::new(predicate, message));
        self
    }

    /// Returns the accumulated rules in insertion order.
    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R: ?Sized> Default for RuleBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> Clone for RuleBuilder<R> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for RuleBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

impl<R: ?Sized> IntoIterator for RuleBuilder<R> {
    type Item = Rule<R>;
    type IntoIter = std::vec::IntoIter<Rule<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<R: ?Sized> From<Rule<R>> for RuleBuilder<R> {
    fn from(rule: Rule<R>) -> Self {
        Self { rules: vec![rule] }
    }
}
