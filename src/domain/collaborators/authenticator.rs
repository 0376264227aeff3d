//! Authentication collaborator.

use crate::domain::entities::Credentials;
use crate::error::AppError;
use async_trait::async_trait;

/// Verifies credentials submitted by the form.
///
/// The form treats the error message as opaque and shows it to the user as
/// is, so implementations should return something fit for display.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::InMemoryAuthenticator`] - HMAC-hashed credential store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticates the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the credentials are rejected.
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError>;
}
