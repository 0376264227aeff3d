//! Terminal collaborators used by the interactive CLI.
//!
//! Output goes through `colored` so it degrades to plain text when stdout is
//! not a TTY or `NO_COLOR` is set.

use colored::*;

use crate::domain::collaborators::{Navigator, Notifier};
use crate::domain::entities::Destination;

/// Prints the navigation target instead of routing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, destination: &Destination) {
        println!(
            "{} {}",
            "✅ Signed in, redirecting to".green().bold(),
            destination.path().bright_white()
        );
    }
}

/// Prints notifications to stderr, like a toast that never fades.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red().bold());
    }
}
