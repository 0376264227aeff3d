//! Reaction to authentication results.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::collaborators::{Navigator, Notifier};
use crate::domain::entities::{AuthStatus, Destination};
use crate::error::AppError;

/// What the handler did with a settled status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigated(Destination),
    Notified(String),
    /// Failed without a message; nothing was shown.
    Rejected,
}

/// Observes [`AuthStatus`] snapshots and reacts once per attempt.
///
/// - Authenticated: asks the [`Navigator`] for the destination, at most once
///   for the whole session
/// - Error message: shows it through the [`Notifier`] unchanged
/// - Failure without a message: nothing shown, reported as [`LoginOutcome::Rejected`]
/// - Loading or idle: nothing
///
/// Seeing the same snapshot twice is a no-op, so the handler can be fed from
/// a re-rendering loop as well as from [`run`](Self::run).
pub struct LoginOutcomeHandler<N: Navigator, T: Notifier> {
    navigator: Arc<N>,
    notifier: Arc<T>,
    destination: Destination,
    last_handled: u64,
    navigated: bool,
}

impl<N: Navigator, T: Notifier> LoginOutcomeHandler<N, T> {
    pub fn new(navigator: Arc<N>, notifier: Arc<T>, destination: Destination) -> Self {
        Self {
            navigator,
            notifier,
            destination,
            last_handled: 0,
            navigated: false,
        }
    }

    /// Reacts to one snapshot.
    ///
    /// Returns `None` when the snapshot is not settled or was already handled.
    /// A success after navigation already happened is reported as
    /// [`LoginOutcome::Navigated`] without calling the navigator again.
    pub fn handle(&mut self, status: &AuthStatus) -> Option<LoginOutcome> {
        if !status.is_settled() || status.attempt <= self.last_handled {
            return None;
        }
        self.last_handled = status.attempt;

        if status.is_authenticated {
            if self.navigated {
                debug!(attempt = status.attempt, "Already navigated away");
            } else {
                self.navigated = true;
                info!(attempt = status.attempt, destination = %self.destination, "Navigating");
                self.navigator.navigate(&self.destination);
            }
            return Some(LoginOutcome::Navigated(self.destination.clone()));
        }

        match status.error_message.as_deref() {
            Some(message) => {
                self.notifier.error(message);
                Some(LoginOutcome::Notified(message.to_string()))
            }
            None => {
                debug!(attempt = status.attempt, "Login rejected without a message");
                Some(LoginOutcome::Rejected)
            }
        }
    }

    /// Waits for the next settled snapshot and reacts to it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the controller is dropped before a
    /// result arrives.
    pub async fn run(
        &mut self,
        rx: &mut watch::Receiver<AuthStatus>,
    ) -> Result<LoginOutcome, AppError> {
        loop {
            let status = rx.borrow_and_update().clone();
            if let Some(outcome) = self.handle(&status) {
                return Ok(outcome);
            }

            if rx.changed().await.is_err() {
                return Err(AppError::internal(
                    "Authentication status channel closed",
                    json!({ "last_attempt": status.attempt }),
                ));
            }
        }
    }
}
