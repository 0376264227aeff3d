//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the form runs.
//!
//! ```bash
//! export CREDENTIAL_SIGNING_SECRET="change-me"
//! export DEMO_EMAIL="demo@example.com"
//! export DEMO_PASSWORD="Secret123"
//! ```
//!
//! ## Required Variables
//!
//! - `CREDENTIAL_SIGNING_SECRET` - HMAC key for stored password digests
//!
//! ## Optional Variables
//!
//! - `CATALOGUE_PATH` - Where to go after login (default: `/catalogue`)
//! - `PASSWORD_MIN_LENGTH` - Minimum password length (default: 8, range 1-128)
//! - `DEMO_EMAIL` / `DEMO_PASSWORD` - Seed account for the credential store; set both or neither
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::validation::DEFAULT_PASSWORD_MIN_LENGTH;
use crate::infrastructure::validation::schema::PASSWORD_MAX_LENGTH;

/// An account seeded into the in-memory credential store.
#[derive(Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAccount")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Navigation target after a successful login (`CATALOGUE_PATH`).
    pub catalogue_path: String,
    /// Minimum password length enforced by the schema (`PASSWORD_MIN_LENGTH`).
    pub password_min_length: u64,
    pub log_level: String,
    pub log_format: String,
    /// HMAC key used to digest stored passwords.
    /// Loaded from `CREDENTIAL_SIGNING_SECRET`. Must be non-empty.
    pub credential_signing_secret: String,
    pub demo_account: Option<DemoAccount>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the signing secret is missing or only one half of
    /// the demo account is set.
    pub fn from_env() -> Result<Self> {
        let catalogue_path =
            env::var("CATALOGUE_PATH").unwrap_or_else(|_| "/catalogue".to_string());

        let password_min_length = env::var("PASSWORD_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PASSWORD_MIN_LENGTH);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let credential_signing_secret = env::var("CREDENTIAL_SIGNING_SECRET")
            .context("CREDENTIAL_SIGNING_SECRET must be set")?;

        let demo_account = Self::load_demo_account().context("Failed to load demo account")?;

        Ok(Self {
            catalogue_path,
            password_min_length,
            log_level,
            log_format,
            credential_signing_secret,
            demo_account,
        })
    }

    /// Loads the optional seed account.
    ///
    /// Returns `None` when neither `DEMO_EMAIL` nor `DEMO_PASSWORD` is set.
    fn load_demo_account() -> Result<Option<DemoAccount>> {
        match (env::var("DEMO_EMAIL").ok(), env::var("DEMO_PASSWORD").ok()) {
            (Some(email), Some(password)) => Ok(Some(DemoAccount { email, password })),
            (None, None) => Ok(None),
            (Some(_), None) => anyhow::bail!("DEMO_PASSWORD must be set when DEMO_EMAIL is set"),
            (None, Some(_)) => anyhow::bail!("DEMO_EMAIL must be set when DEMO_PASSWORD is set"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `catalogue_path` does not start with `/`
    /// - `password_min_length` is outside 1-128
    /// - `log_format` is not `text` or `json`
    /// - `credential_signing_secret` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.catalogue_path.starts_with('/') {
            anyhow::bail!(
                "CATALOGUE_PATH must start with '/', got '{}'",
                self.catalogue_path
            );
        }

        if self.password_min_length == 0 || self.password_min_length > PASSWORD_MAX_LENGTH {
            anyhow::bail!(
                "PASSWORD_MIN_LENGTH must be between 1 and {}, got {}",
                PASSWORD_MAX_LENGTH,
                self.password_min_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.credential_signing_secret.is_empty() {
            anyhow::bail!("CREDENTIAL_SIGNING_SECRET must not be empty");
        }

        if let Some(ref demo) = self.demo_account
            && (demo.email.is_empty() || demo.password.is_empty())
        {
            anyhow::bail!("DEMO_EMAIL and DEMO_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Catalogue path: {}", self.catalogue_path);
        tracing::info!("  Password min length: {}", self.password_min_length);
        tracing::info!(
            "  Signing secret: {}",
            mask_secret(&self.credential_signing_secret)
        );

        if let Some(ref demo) = self.demo_account {
            tracing::info!("  Demo account: {} (enabled)", demo.email);
        } else {
            tracing::info!("  Demo account: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping at most the first two characters.
///
/// - `change-me` → `ch***`
/// - `ab` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
