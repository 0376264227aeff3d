//! Observable state of the authentication collaborator.

use serde::Serialize;

/// Snapshot of the latest authentication attempt.
///
/// Published by the controller on a watch channel and read by the outcome
/// handler. `attempt` increases by one on every submit, so observers can tell
/// a fresh result from a repeated observation of the same one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub attempt: u64,
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub error_message: Option<String>,
}

impl AuthStatus {
    /// No attempt made yet.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading(attempt: u64) -> Self {
        Self {
            attempt,
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn authenticated(attempt: u64) -> Self {
        Self {
            attempt,
            is_authenticated: true,
            ..Default::default()
        }
    }

    /// Empty messages are kept as `None`.
    pub fn failed(attempt: u64, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            attempt,
            error_message: (!message.is_empty()).then_some(message),
            ..Default::default()
        }
    }

    /// True once a submitted attempt has finished, whatever its result.
    ///
    /// A failure without a message is still settled.
    pub fn is_settled(&self) -> bool {
        self.attempt > 0 && !self.is_loading
    }
}
