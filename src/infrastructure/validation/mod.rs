//! Concrete [`crate::domain::collaborators::LoginSchema`] implementations.

pub mod schema;

pub use schema::{
    DEFAULT_PASSWORD_MIN_LENGTH, EMAIL_MESSAGE, PASSWORD_COMPOSITION_MESSAGE, StandardLoginSchema,
};
