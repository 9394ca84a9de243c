//! Transient user feedback.
//!
//! Notifications carry a message and a kind; each kind maps to a fixed
//! color. The terminal notifier writes a styled status line; successive
//! notifications simply follow one another without queueing.

use console::{style, Color};

/// The kind of a notification, each with a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    pub fn color(self) -> Color {
        match self {
            NotificationKind::Success => Color::Green,
            NotificationKind::Danger => Color::Red,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Danger => "✖",
        }
    }
}

/// Emits notifications to the user.
///
/// A trait so the CLI can run against a real terminal while tests use a
/// silent stand-in.
pub trait Notify {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Writes notifications as colored status lines on the terminal.
pub struct TerminalNotifier {
    use_color: bool,
}

impl TerminalNotifier {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Notify for TerminalNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if self.use_color {
            println!(
                "{}",
                style(format!("{} {}", kind.symbol(), message)).fg(kind.color())
            );
        } else {
            println!("{} {}", kind.symbol(), message);
        }
    }
}

/// Discards all notifications. Used in tests.
pub struct NullNotifier;

impl Notify for NullNotifier {
    fn notify(&self, _message: &str, _kind: NotificationKind) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_fixed_colors() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Danger.color(), Color::Red);
    }
}
