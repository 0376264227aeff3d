//! Derived validation view of the form.

use serde::Serialize;

/// Shown for a failing predicate that gave no message.
pub const FALLBACK_FIELD_ERROR: &str = "Invalid value";

/// Outcome of a single field predicate.
///
/// `message` is only meaningful when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateOutcome {
    pub valid: bool,
    pub message: String,
}

impl PredicateOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// The failure message, or `None` when the value passed.
    ///
    /// A failure without a message reports [`FALLBACK_FIELD_ERROR`].
    pub fn into_error(self) -> Option<String> {
        match (self.valid, self.message.is_empty()) {
            (true, _) => None,
            (false, true) => Some(FALLBACK_FIELD_ERROR.to_string()),
            (false, false) => Some(self.message),
        }
    }
}

/// Field errors and submit gate derived from a [`super::FormState`].
///
/// Always rebuilt as a whole; never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub can_submit: bool,
}
