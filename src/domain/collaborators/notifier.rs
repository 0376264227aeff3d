//! Toast/notification collaborator.

/// Displays transient notifications.
///
/// # Implementations
///
/// - [`crate::infrastructure::terminal::TerminalNotifier`] - Prints to stderr
/// - [`crate::infrastructure::notify::TracingNotifier`] - Logs at `warn`
/// - [`crate::infrastructure::notify::ChannelNotifier`] - Forwards over a channel
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows an error notification with the given text.
    fn error(&self, message: &str);
}
