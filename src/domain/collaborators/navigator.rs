//! Router collaborator.

use crate::domain::entities::Destination;

/// Performs navigation requests emitted by the form.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &Destination);
}
