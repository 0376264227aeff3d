//! Default email and password rules.

use regex::Regex;
use std::sync::LazyLock;
use validator::{ValidateEmail, ValidateLength};

use crate::domain::collaborators::LoginSchema;
use crate::domain::entities::PredicateOutcome;

pub const DEFAULT_PASSWORD_MIN_LENGTH: u64 = 8;
pub const PASSWORD_MAX_LENGTH: u64 = 128;

pub const EMAIL_MESSAGE: &str = "Enter a valid email address";
pub const PASSWORD_COMPOSITION_MESSAGE: &str =
    "Password must contain at least one letter and one number";

static LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}").unwrap());
static DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Nd}").unwrap());

/// Email and password rules used by the login form.
///
/// # Rules
///
/// - **Email**: HTML5-style address check from `validator`
/// - **Password**: `min_length..=128` characters, at least one letter and one digit
///
/// Rules are checked in order and only the first failure is reported.
#[derive(Debug, Clone)]
pub struct StandardLoginSchema {
    min_length: u64,
}

impl StandardLoginSchema {
    pub fn new(min_length: u64) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> u64 {
        self.min_length
    }
}

impl Default for StandardLoginSchema {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_MIN_LENGTH)
    }
}

impl LoginSchema for StandardLoginSchema {
    fn email(&self, value: &str) -> PredicateOutcome {
        if value.validate_email() {
            PredicateOutcome::pass()
        } else {
            PredicateOutcome::fail(EMAIL_MESSAGE)
        }
    }

    fn password(&self, value: &str) -> PredicateOutcome {
        if !value.validate_length(Some(self.min_length), None, None) {
            return PredicateOutcome::fail(format!(
                "Password must be at least {} characters",
                self.min_length
            ));
        }

        if !value.validate_length(None, Some(PASSWORD_MAX_LENGTH), None) {
            return PredicateOutcome::fail(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_LENGTH
            ));
        }

        if !LETTER_REGEX.is_match(value) || !DIGIT_REGEX.is_match(value) {
            return PredicateOutcome::fail(PASSWORD_COMPOSITION_MESSAGE);
        }

        PredicateOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let schema = StandardLoginSchema::default();

        assert!(schema.email("a@b.com").valid);
        assert!(schema.email("first.last+tag@example.co.uk").valid);
    }

    #[test]
    fn test_invalid_emails() {
        let schema = StandardLoginSchema::default();

        for value in ["bad", "not-an-email", "@example.com", "user@"] {
            let outcome = schema.email(value);
            assert!(!outcome.valid, "{value} should be rejected");
            assert_eq!(outcome.message, EMAIL_MESSAGE);
        }
    }

    #[test]
    fn test_password_accepts_letters_and_digits() {
        let schema = StandardLoginSchema::default();
        assert!(schema.password("Secret123").valid);
    }

    #[test]
    fn test_password_too_short() {
        let schema = StandardLoginSchema::default();
        let outcome = schema.password("Ab1");

        assert!(!outcome.valid);
        assert_eq!(outcome.message, "Password must be at least 8 characters");
    }

    #[test]
    fn test_password_length_counts_chars() {
        let schema = StandardLoginSchema::new(4);
        // 4 chars, 6 bytes
        assert!(schema.password("ñá12").valid);
    }

    #[test]
    fn test_password_too_long() {
        let schema = StandardLoginSchema::default();
        let long = format!("a1{}", "x".repeat(127));
        let outcome = schema.password(&long);

        assert!(!outcome.valid);
        assert_eq!(outcome.message, "Password must be at most 128 characters");
    }

    #[test]
    fn test_password_needs_digit_and_letter() {
        let schema = StandardLoginSchema::default();

        assert_eq!(
            schema.password("onlyletters").message,
            PASSWORD_COMPOSITION_MESSAGE
        );
        assert_eq!(
            schema.password("1234567890").message,
            PASSWORD_COMPOSITION_MESSAGE
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let schema = StandardLoginSchema::default();
        // Too short and no digit: length is reported
        assert_eq!(
            schema.password("abc").message,
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_custom_min_length() {
        let schema = StandardLoginSchema::new(12);

        assert_eq!(schema.min_length(), 12);
        assert!(!schema.password("Secret123").valid);
        assert!(schema.password("Secret123456").valid);
    }
}
