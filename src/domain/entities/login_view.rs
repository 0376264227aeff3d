//! Render-ready snapshot of the login form.

use serde::Serialize;

use super::{AuthStatus, FormState, ValidationResult};

/// Mask character used for hidden passwords.
pub const MASK_CHAR: char = '•';

/// How the password input should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordInputKind {
    Text,
    Password,
}

/// Everything a renderer needs to draw the form.
///
/// Built from the current [`FormState`], its [`ValidationResult`] and the
/// latest [`AuthStatus`]. Holds no references back into the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    pub email: String,
    /// Plaintext when visible, otherwise one mask char per character.
    pub password_display: String,
    pub password_input: PasswordInputKind,
    pub terms_accepted: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub submit_enabled: bool,
    pub is_submitting: bool,
}

impl LoginView {
    pub fn render(state: &FormState, result: &ValidationResult, status: &AuthStatus) -> Self {
        let (password_display, password_input) = if state.show_password {
            (state.password.clone(), PasswordInputKind::Text)
        } else {
            (
                state.password.chars().map(|_| MASK_CHAR).collect(),
                PasswordInputKind::Password,
            )
        };

        Self {
            email: state.email.clone(),
            password_display,
            password_input,
            terms_accepted: state.terms_accepted,
            email_error: result.email_error.clone(),
            password_error: result.password_error.clone(),
            submit_enabled: result.can_submit,
            is_submitting: status.is_loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(show_password: bool) -> FormState {
        FormState {
            email: "a@b.com".to_string(),
            password: "Señor12".to_string(),
            terms_accepted: true,
            show_password,
        }
    }

    #[test]
    fn test_masked_password_counts_chars_not_bytes() {
        let view = LoginView::render(
            &state(false),
            &ValidationResult::default(),
            &AuthStatus::idle(),
        );

        assert_eq!(view.password_display, "•••••••");
        assert_eq!(view.password_input, PasswordInputKind::Password);
    }

    #[test]
    fn test_visible_password_is_plaintext() {
        let view = LoginView::render(
            &state(true),
            &ValidationResult::default(),
            &AuthStatus::idle(),
        );

        assert_eq!(view.password_display, "Señor12");
        assert_eq!(view.password_input, PasswordInputKind::Text);
    }

    #[test]
    fn test_submitting_follows_loading_status() {
        let result = ValidationResult {
            can_submit: true,
            ..Default::default()
        };
        let view = LoginView::render(&state(false), &result, &AuthStatus::loading(1));

        assert!(view.submit_enabled);
        assert!(view.is_submitting);
    }

    #[test]
    fn test_serializes_input_kind_lowercase() {
        let view = LoginView::render(
            &state(false),
            &ValidationResult::default(),
            &AuthStatus::idle(),
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["password_input"], "password");
        assert_eq!(json["email"], "a@b.com");
    }
}
