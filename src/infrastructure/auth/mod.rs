//! Concrete [`crate::domain::collaborators::Authenticator`] implementations.

pub mod in_memory;

pub use in_memory::InMemoryAuthenticator;
