//! # Login Form
//!
//! A login form controller with schema validation, injectable authentication
//! and explicit outcome handling, plus a terminal front end.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Form entities and collaborator traits
//! - **Application Layer** ([`application`]) - The form controller and outcome handler
//! - **Infrastructure Layer** ([`infrastructure`]) - Schemas, credential store, notifiers
//!
//! ## Features
//!
//! - Inline field errors that only appear for non-empty, invalid input
//! - Submit gate combining both predicates with the terms checkbox
//! - Password visibility toggle that never touches validation
//! - Authentication results published on a watch channel
//! - Navigation or a single notification per submit attempt
//!
//! ## Quick Start
//!
//! ```bash
//! export CREDENTIAL_SIGNING_SECRET="change-me"
//! export DEMO_EMAIL="demo@example.com"
//! export DEMO_PASSWORD="Secret123"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        FormValidationController, LoginOutcome, LoginOutcomeHandler,
    };
    pub use crate::domain::collaborators::{Authenticator, LoginSchema, Navigator, Notifier};
    pub use crate::domain::entities::{
        AuthStatus, Credentials, Destination, FormState, LoginView, PredicateOutcome,
        ValidationResult,
    };
    pub use crate::error::AppError;
}
