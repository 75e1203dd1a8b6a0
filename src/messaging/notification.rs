// Notification values pushed towards the presentation layer
//
// The engine itself never prints. Receiver transitions, remote outcomes
// and dispatch failures are pushed onto the channel as plain values;
// whatever sits on the consuming side decides how to render them.

use std::time::{SystemTime, UNIX_EPOCH};

/// Severity of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Routine receiver transition
    Info,
    /// Unusual but normal outcome, e.g. undoing with an empty history
    Warning,
    /// A dispatch failure; the caller also gets the error
    Error,
}

/// Which part of the home produced the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Light,
    Fan,
    Remote,
}

/// One transcript entry
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub category: NotificationCategory,
    pub message: String,
    /// Milliseconds since the Unix epoch, for ordering on the consumer side
    pub timestamp: u64,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        category: NotificationCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            category,
            message: message.into(),
            timestamp: now_millis(),
        }
    }

    pub fn info(category: NotificationCategory, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, category, message)
    }

    pub fn warning(category: NotificationCategory, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, category, message)
    }

    pub fn error(category: NotificationCategory, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, category, message)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_by_constructor() {
        let info = Notification::info(NotificationCategory::Fan, "Attic fan is OFF");
        let warning = Notification::warning(NotificationCategory::Remote, "Nothing to undo");
        let error = Notification::error(NotificationCategory::Remote, "slot 9 is out of range");

        assert_eq!(info.level, NotificationLevel::Info);
        assert_eq!(warning.level, NotificationLevel::Warning);
        assert_eq!(error.level, NotificationLevel::Error);
        assert_eq!(warning.message, "Nothing to undo");
    }

    #[test]
    fn test_entries_are_timestamped() {
        let notification = Notification::info(NotificationCategory::Light, "Hallway light is ON");

        assert_eq!(notification.category, NotificationCategory::Light);
        assert!(notification.timestamp > 0);
    }
}
