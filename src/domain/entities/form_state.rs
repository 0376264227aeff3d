//! Mutable record of the form's raw input.

/// Raw user input and UI toggles for one form session.
///
/// Only the controller's field-update events write to it. The record is
/// discarded together with the controller once the session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
    pub show_password: bool,
}

impl FormState {
    /// Returns true when both text fields have content and the terms box is ticked.
    ///
    /// This says nothing about validity; it is the "form completed" half of
    /// the submit gate.
    pub fn is_filled(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && self.terms_accepted
    }
}
