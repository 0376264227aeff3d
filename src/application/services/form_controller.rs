//! Login form controller: field state, derived validation and submit hand-off.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::collaborators::{Authenticator, LoginSchema};
use crate::domain::entities::{AuthStatus, Credentials, FormState, LoginView, ValidationResult};

/// Message published when the authenticator panics or is cancelled.
pub const AUTHENTICATOR_FAILED: &str = "Authentication failed unexpectedly, please try again";

/// Derives the [`ValidationResult`] for a form state.
///
/// # Policy
///
/// - An empty field never shows an error, whatever its predicate says
/// - A non-empty field shows its predicate's message when it fails
/// - Submit is enabled only when both fields are non-empty and pass, and the
///   terms box is ticked
///
/// A field that is cleared after being filled in stops showing its error.
pub fn validate_form<S: LoginSchema + ?Sized>(state: &FormState, schema: &S) -> ValidationResult {
    let email = (!state.email.is_empty()).then(|| schema.email(&state.email));
    let password = (!state.password.is_empty()).then(|| schema.password(&state.password));

    let email_valid = email.as_ref().is_some_and(|o| o.valid);
    let password_valid = password.as_ref().is_some_and(|o| o.valid);

    ValidationResult {
        email_error: email.and_then(|o| o.into_error()),
        password_error: password.and_then(|o| o.into_error()),
        can_submit: state.is_filled() && email_valid && password_valid,
    }
}

/// Owns one login form session.
///
/// Every mutation replaces a single field of [`FormState`] and then rebuilds
/// the cached [`ValidationResult`] from scratch. [`submit`](Self::submit) hands
/// the credentials to the injected [`Authenticator`] and publishes its result
/// as [`AuthStatus`] snapshots on a watch channel; see
/// [`crate::application::services::LoginOutcomeHandler`] for the reacting side.
pub struct FormValidationController<S: LoginSchema, A: Authenticator + 'static> {
    state: FormState,
    result: ValidationResult,
    schema: Arc<S>,
    authenticator: Arc<A>,
    status_tx: Arc<watch::Sender<AuthStatus>>,
    attempts: u64,
}

impl<S: LoginSchema, A: Authenticator + 'static> FormValidationController<S, A> {
    /// Creates a controller with an empty form.
    ///
    /// # Arguments
    ///
    /// - `schema` - email and password predicates
    /// - `authenticator` - receives the credentials on submit
    pub fn new(schema: Arc<S>, authenticator: Arc<A>) -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::idle());
        let state = FormState::default();
        let result = validate_form(&state, schema.as_ref());

        Self {
            state,
            result,
            schema,
            authenticator,
            status_tx: Arc::new(status_tx),
            attempts: 0,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.state.email = value.into();
        self.refresh();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.password = value.into();
        self.refresh();
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.state.terms_accepted = accepted;
        self.refresh();
    }

    /// Flips password visibility. Validation is not touched.
    pub fn toggle_show_password(&mut self) {
        self.state.show_password = !self.state.show_password;
    }

    /// Pure derivation of the current state's validation result.
    pub fn recompute(&self) -> ValidationResult {
        validate_form(&self.state, self.schema.as_ref())
    }

    fn refresh(&mut self) {
        self.result = self.recompute();
        debug!(
            can_submit = self.result.can_submit,
            email_error = self.result.email_error.is_some(),
            password_error = self.result.password_error.is_some(),
            "Form revalidated"
        );
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The result cached after the last mutation.
    pub fn validation(&self) -> &ValidationResult {
        &self.result
    }

    pub fn can_submit(&self) -> bool {
        self.result.can_submit
    }

    /// True while the latest submit is waiting on the authenticator.
    pub fn is_submitting(&self) -> bool {
        self.status_tx.borrow().is_loading
    }

    /// Latest published authentication status.
    pub fn status(&self) -> AuthStatus {
        self.status_tx.borrow().clone()
    }

    /// Subscribes to authentication status snapshots.
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.state.email.clone(), self.state.password.clone())
    }

    pub fn view(&self) -> LoginView {
        LoginView::render(&self.state, &self.result, &self.status_tx.borrow())
    }

    /// Hands the current credentials to the authenticator.
    ///
    /// Does not re-validate: callers gate the action on
    /// [`can_submit`](Self::can_submit). Publishes a loading snapshot
    /// immediately and the result once the authenticator returns. A result
    /// arriving after a newer submit has started is dropped. If the
    /// authenticator panics, the attempt fails with [`AUTHENTICATOR_FAILED`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self) -> JoinHandle<()> {
        self.attempts += 1;
        let attempt = self.attempts;
        let credentials = self.credentials();

        if !self.result.can_submit {
            debug!(attempt, "Submitting a form that does not pass validation");
        }

        self.status_tx.send_replace(AuthStatus::loading(attempt));
        info!(attempt, email = %credentials.email, "Login submitted");

        let authenticator = Arc::clone(&self.authenticator);
        let status_tx = Arc::clone(&self.status_tx);

        tokio::spawn(async move {
            let call =
                tokio::spawn(async move { authenticator.authenticate(&credentials).await });

            let status = match call.await {
                Ok(Ok(())) => {
                    info!(attempt, "Login accepted");
                    AuthStatus::authenticated(attempt)
                }
                Ok(Err(e)) => {
                    warn!(
                        attempt,
                        code = e.code(),
                        details = %e.details(),
                        "Login rejected: {}",
                        e
                    );
                    AuthStatus::failed(attempt, e.message())
                }
                Err(e) => {
                    error!(attempt, "Authenticator task failed: {}", e);
                    AuthStatus::failed(attempt, AUTHENTICATOR_FAILED)
                }
            };

            status_tx.send_if_modified(|current| {
                if current.attempt != attempt {
                    debug!(attempt, current = current.attempt, "Dropping stale login result");
                    return false;
                }
                *current = status;
                true
            });
        })
    }
}
