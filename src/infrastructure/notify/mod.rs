//! Non-interactive [`crate::domain::collaborators::Notifier`] implementations.

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::collaborators::Notifier;

/// Notifier that writes each message to the log at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(notification = message, "Login error");
    }
}

/// A notification forwarded by [`ChannelNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Notifier that forwards messages to a receiver owned by the UI.
///
/// Sending never blocks. If the receiver is gone the message is logged and dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        let notification = Notification {
            message: message.to_string(),
        };
        if self.tx.send(notification).is_err() {
            warn!(notification = message, "Notification receiver dropped");
        }
    }
}
