//! Credential store kept in process memory.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::collaborators::Authenticator;
use crate::domain::entities::Credentials;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Message returned for any rejected login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authenticator backed by an in-memory map of email to password digest.
///
/// Passwords are stored as HMAC-SHA256 digests keyed by `signing_secret`,
/// never in plaintext. Emails are matched case-insensitively. Unknown emails
/// and wrong passwords produce the same error so the response does not reveal
/// which accounts exist.
pub struct InMemoryAuthenticator {
    signing_secret: String,
    accounts: HashMap<String, String>,
}

impl InMemoryAuthenticator {
    /// Creates an empty store.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key used for every stored digest
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            accounts: HashMap::new(),
        }
    }

    /// Adds or replaces an account.
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.insert(email, password);
        self
    }

    pub fn insert(&mut self, email: &str, password: &str) {
        let digest = hex::encode(self.mac(password).finalize().into_bytes());
        self.accounts.insert(email.to_lowercase(), digest);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn mac(&self, password: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        mac
    }

    fn rejected() -> AppError {
        AppError::unauthorized(INVALID_CREDENTIALS, json!({}))
    }
}

#[async_trait]
impl Authenticator for InMemoryAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        let Some(stored) = self.accounts.get(&credentials.email.to_lowercase()) else {
            debug!(email = %credentials.email, "Unknown account");
            return Err(Self::rejected());
        };

        let expected = hex::decode(stored).map_err(|e| {
            AppError::internal(
                "Corrupted credential digest",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.mac(&credentials.password)
            .verify_slice(&expected)
            .map_err(|_| Self::rejected())
    }
}
