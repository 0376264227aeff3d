//! Validation collaborator for the two form fields.

use crate::domain::entities::PredicateOutcome;

/// Pure predicates for the email and password fields.
///
/// Implementations must be deterministic: the same input always yields the
/// same outcome, because the controller recomputes on every keystroke.
///
/// # Implementations
///
/// - [`crate::infrastructure::validation::StandardLoginSchema`] - `validator` + regex rules
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LoginSchema: Send + Sync {
    /// Checks an email address.
    fn email(&self, value: &str) -> PredicateOutcome;

    /// Checks a password.
    fn password(&self, value: &str) -> PredicateOutcome;
}
