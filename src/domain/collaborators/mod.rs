//! Collaborator trait definitions for the domain layer.
//!
//! The form never reaches for ambient global state. Everything it talks to is
//! injected at construction through one of these traits, and concrete
//! implementations live in `crate::infrastructure`.
//!
//! # Architecture
//!
//! - Traits define the contract the form relies on
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Collaborators
//!
//! - [`LoginSchema`] - Email and password predicates
//! - [`Authenticator`] - Verifies submitted credentials
//! - [`Navigator`] - Routes the user after a successful login
//! - [`Notifier`] - Shows transient error notifications

pub mod authenticator;
pub mod login_schema;
pub mod navigator;
pub mod notifier;

pub use authenticator::Authenticator;
pub use login_schema::LoginSchema;
pub use navigator::Navigator;
pub use notifier::Notifier;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
#[cfg(test)]
pub use login_schema::MockLoginSchema;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use notifier::MockNotifier;
