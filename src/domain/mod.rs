//! Domain layer containing the form's entities and collaborator contracts.
//!
//! Nothing in here knows about terminals, credential stores or runtimes.
//!
//! # Architecture
//!
//! - [`entities`] - Form state, derived validation and status snapshots
//! - [`collaborators`] - Traits for everything the form talks to
//!
//! # Login Flow
//!
//! 1. Input events update [`entities::FormState`] through the controller
//! 2. [`entities::ValidationResult`] is recomputed from the state
//! 3. Submit hands [`entities::Credentials`] to [`collaborators::Authenticator`]
//! 4. The result is published as [`entities::AuthStatus`]
//! 5. The outcome handler calls [`collaborators::Navigator`] or [`collaborators::Notifier`]

pub mod collaborators;
pub mod entities;
