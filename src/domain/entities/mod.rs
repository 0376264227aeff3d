//! Core domain entities representing the login form's data model.
//!
//! Entities are plain data structures. The only logic they carry is
//! presentation-free derivation (masking, redaction, status snapshots).
//!
//! # Entity Types
//!
//! - [`FormState`] - Raw user input and UI toggles for one form session
//! - [`ValidationResult`] - Derived field errors and the submit-enabled flag
//! - [`Credentials`] - The `(email, password)` pair handed to the authenticator
//! - [`AuthStatus`] - Snapshot of an in-flight or finished authentication attempt
//! - [`LoginView`] - Render-ready view of the whole form
//! - [`Destination`] - Navigation targets reachable from the form

pub mod auth_status;
pub mod credentials;
pub mod destination;
pub mod form_state;
pub mod login_view;
pub mod validation_result;

pub use auth_status::AuthStatus;
pub use credentials::Credentials;
pub use destination::Destination;
pub use form_state::FormState;
pub use login_view::{LoginView, PasswordInputKind};
pub use validation_result::{FALLBACK_FIELD_ERROR, PredicateOutcome, ValidationResult};
