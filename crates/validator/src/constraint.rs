//! Constraints: rules bound to a field of a target type
//!
//! A [`Constraint`] is one `(value source, field name, rule)` triple, ready
//! for evaluation against a `&T`. It comes in two shapes:
//!
//! - [`Constraint::Direct`] reads a field of `T` and tests one rule.
//! - [`Constraint::Nested`] projects `T` to a sub-object `R` and evaluates a
//!   child `Constraint<R>` against it. The child may itself be nested, so
//!   nesting depth is unbounded.
//!
//! Qualified field names (`root.inner`) are computed once when a nested
//! constraint is built, never during evaluation.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::Rule;

/// Shared accessor from a parent value to one of its parts.
pub(crate) type Getter<T, R> = Arc<dyn Fn(&T) -> &R + Send + Sync>;

// ============================================================================
// CONSTRAINT
// ============================================================================

pub(crate) enum Constraint<T: ?Sized> {
    Direct(Direct<T>),
    Nested(Nested<T>),
}

pub(crate) struct Direct<T: ?Sized> {
    field_name: Cow<'static, str>,
    message: Cow<'static, str>,
    check: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

pub(crate) struct Nested<T: ?Sized> {
    root_field_name: Cow<'static, str>,
    /// `root_field_name + "." + inner field name`
    field_name: Cow<'static, str>,
    inner: Arc<dyn Projection<T>>,
}

impl<T: ?Sized + 'static> Constraint<T> {
    /// Binds `rule` to the value `getter` extracts from `T`.
    pub(crate) fn direct<R>(
        getter: Getter<T, R>,
        field_name: Cow<'static, str>,
        rule: Rule<R>,
    ) -> Self
    where
        R: ?Sized + 'static,
    {
        let (predicate, message) = rule.into_parts();
        Self::Direct(Direct {
            field_name,
            message,
            check: Arc::new(move |instance: &T| predicate.test(getter(instance))),
        })
    }

    /// Re-roots a child constraint under `root_field_name`.
    pub(crate) fn nested<R>(
        extractor: Getter<T, R>,
        root_field_name: Cow<'static, str>,
        inner: Constraint<R>,
    ) -> Self
    where
        R: ?Sized + 'static,
    {
        let field_name = Cow::Owned(format!("{root_field_name}.{}", inner.field_name()));
        Self::Nested(Nested {
            root_field_name,
            field_name,
            inner: Arc::new(Projected { extractor, inner }),
        })
    }
}

impl<T: ?Sized> Constraint<T> {
    /// Effective field name violations are reported under.
    pub(crate) fn field_name(&self) -> &Cow<'static, str> {
        match self {
            Self::Direct(direct) => &direct.field_name,
            Self::Nested(nested) => &nested.field_name,
        }
    }

    /// Message of the underlying rule.
    pub(crate) fn message(&self) -> &Cow<'static, str> {
        match self {
            Self::Direct(direct) => &direct.message,
            Self::Nested(nested) => nested.inner.message(),
        }
    }

    /// Evaluates the rule against the effective value of `instance`.
    pub(crate) fn check(&self, instance: &T) -> bool {
        match self {
            Self::Direct(direct) => (direct.check)(instance),
            Self::Nested(nested) => nested.inner.check(instance),
        }
    }
}

impl<T: ?Sized> Clone for Constraint<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(direct) => Self::Direct(Direct {
                field_name: direct.field_name.clone(),
                message: direct.message.clone(),
                check: Arc::clone(&direct.check),
            }),
            Self::Nested(nested) => Self::Nested(Nested {
                root_field_name: nested.root_field_name.clone(),
                field_name: nested.field_name.clone(),
                inner: Arc::clone(&nested.inner),
            }),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(direct) => f
                .debug_struct("Direct")
                .field("field_name", &direct.field_name)
                .field("message", &direct.message)
                .finish_non_exhaustive(),
            Self::Nested(nested) => f
                .debug_struct("Nested")
                .field("root_field_name", &nested.root_field_name)
                .field("field_name", &nested.field_name)
                .field("message", nested.inner.message())
                .finish_non_exhaustive(),
        }
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// A child constraint seen through the parent's value extractor.
///
/// Hides the child's value type `R` so constraints over different
/// sub-objects can live in one `Vec<Constraint<T>>`.
trait Projection<T: ?Sized>: Send + Sync {
    fn check(&self, parent: &T) -> bool;

    fn message(&self) -> &Cow<'static, str>;
}

struct Projected<T: ?Sized, R: ?Sized> {
    extractor: Getter<T, R>,
    inner: Constraint<R>,
}

impl<T: ?Sized, R: ?Sized> Projection<T> for Projected<T, R> {
    fn check(&self, parent: &T) -> bool {
        self.inner.check((self.extractor)(parent))
    }

    fn message(&self) -> &Cow<'static, str> {
        self.inner.message()
    }
}
