//! Error types
//!
//! [`Rejection`] is raised by `reject` when a validation run produced at
//! least one violation; it always carries the complete set. [`ValidatorError`]
//! additionally covers a missing validation target.

use crate::foundation::Violations;

/// Validation of an instance failed.
///
/// # Examples
///
/// ```
/// use field_validator::{Rejection, Violation};
///
/// let rejection = Rejection::new(
///     "Validation failed for object User",
///     [Violation::new("email", "field.not.empty")].into_iter().collect(),
/// );
/// assert_eq!(rejection.to_string(), "Validation failed for object User");
/// assert_eq!(rejection.violations().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Rejection {
    message: String,
    violations: Violations,
}

impl Rejection {
    /// Creates a rejection carrying `violations`.
    pub fn new(message: impl Into<String>, violations: Violations) -> Self {
        Self {
            message: message.into(),
            violations,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns every violation of the failed run.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Consumes the rejection and returns the violations.
    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

/// Errors returned by the `Option`-accepting entry points of a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// No instance was supplied.
    #[error("validation target of type `{type_name}` is missing")]
    MissingTarget {
        /// Name of the expected target type.
        type_name: &'static str,
    },

    /// The instance had violations.
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl ValidatorError {
    /// Returns the violations when this is a rejection.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Rejected(rejection) => Some(rejection.violations()),
            Self::MissingTarget { .. } => None,
        }
    }
}
