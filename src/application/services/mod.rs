//! Services for the application layer.

pub mod form_controller;
pub mod outcome_handler;

pub use form_controller::{AUTHENTICATOR_FAILED, FormValidationController, validate_form};
pub use outcome_handler::{LoginOutcome, LoginOutcomeHandler};
