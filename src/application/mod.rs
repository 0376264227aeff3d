//! Application layer services driving the login form.
//!
//! This layer wires the domain entities to the injected collaborators. It owns
//! the form session and reacts to authentication results, but it never
//! performs I/O itself.
//!
//! # Available Services
//!
//! - [`services::form_controller::FormValidationController`] - Field state, validation and submit
//! - [`services::outcome_handler::LoginOutcomeHandler`] - Navigation or notification on result

pub mod services;
