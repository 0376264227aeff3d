#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use login_form::application::services::{FormValidationController, LoginOutcomeHandler};
use login_form::domain::collaborators::{Authenticator, LoginSchema, Navigator, Notifier};
use login_form::domain::entities::{Credentials, Destination, PredicateOutcome};
use login_form::error::AppError;
use login_form::infrastructure::validation::StandardLoginSchema;

/// Schema with fixed outcomes, whatever the input.
pub struct StubSchema {
    pub email_valid: bool,
    pub password_valid: bool,
}

impl LoginSchema for StubSchema {
    fn email(&self, _value: &str) -> PredicateOutcome {
        if self.email_valid {
            PredicateOutcome::pass()
        } else {
            PredicateOutcome::fail("stub email error")
        }
    }

    fn password(&self, _value: &str) -> PredicateOutcome {
        if self.password_valid {
            PredicateOutcome::pass()
        } else {
            PredicateOutcome::fail("stub password error")
        }
    }
}

/// Schema whose predicates always fail without a message.
pub struct SilentSchema;

impl LoginSchema for SilentSchema {
    fn email(&self, _value: &str) -> PredicateOutcome {
        PredicateOutcome::fail("")
    }

    fn password(&self, _value: &str) -> PredicateOutcome {
        PredicateOutcome::fail("")
    }
}

/// Authenticator that records every call and answers with a fixed result.
pub struct RecordingAuthenticator {
    pub calls: Mutex<Vec<Credentials>>,
    rejection: Option<String>,
}

impl RecordingAuthenticator {
    pub fn accepting() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rejection: None,
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rejection: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authenticator for RecordingAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(credentials.clone());
        match &self.rejection {
            Some(message) => Err(AppError::unauthorized(message.clone(), json!({}))),
            None => Ok(()),
        }
    }
}

/// Authenticator whose calls block until the test opens their gate.
///
/// Gates are keyed by password so concurrent attempts can be told apart.
/// Opening a gate with `Some(message)` rejects the call with that message.
#[derive(Default)]
pub struct GatedAuthenticator {
    gates: Mutex<HashMap<String, oneshot::Receiver<Option<String>>>>,
}

impl GatedAuthenticator {
    pub fn gate(&self, password: &str) -> oneshot::Sender<Option<String>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(password.to_string(), rx);
        tx
    }
}

#[async_trait]
impl Authenticator for GatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        let gate = self.gates.lock().unwrap().remove(&credentials.password);
        let Some(gate) = gate else {
            return Err(AppError::internal("No gate registered", json!({})));
        };

        match gate.await {
            Ok(None) => Ok(()),
            Ok(Some(message)) => Err(AppError::unauthorized(message, json!({}))),
            Err(_) => Err(AppError::internal("Gate dropped", json!({}))),
        }
    }
}

/// Authenticator that panics on every call.
pub struct PanickingAuthenticator;

#[async_trait]
impl Authenticator for PanickingAuthenticator {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<(), AppError> {
        panic!("credential store unavailable")
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<Destination>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Destination> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: &Destination) {
        self.visits.lock().unwrap().push(destination.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn catalogue() -> Destination {
    Destination::Catalogue("/catalogue".to_string())
}

pub fn standard_controller<A: Authenticator + 'static>(
    authenticator: Arc<A>,
) -> FormValidationController<StandardLoginSchema, A> {
    FormValidationController::new(Arc::new(StandardLoginSchema::default()), authenticator)
}

pub fn recording_handler() -> (
    LoginOutcomeHandler<RecordingNavigator, RecordingNotifier>,
    Arc<RecordingNavigator>,
    Arc<RecordingNotifier>,
) {
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let handler = LoginOutcomeHandler::new(navigator.clone(), notifier.clone(), catalogue());
    (handler, navigator, notifier)
}
