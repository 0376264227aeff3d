//! Infrastructure layer for external integrations.
//!
//! This layer implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`validation`] - Email and password schemas
//! - [`auth`] - Credential store authenticator
//! - [`notify`] - Log and channel notifiers
//! - [`terminal`] - Terminal navigator and notifier for the CLI

pub mod auth;
pub mod notify;
pub mod terminal;
pub mod validation;
