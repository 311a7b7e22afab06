// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning | Severity::Error => Duration::from_secs(5),
        }
    }
}

/// What a toast says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    /// An i18n key resolved at render time, with interpolation arguments.
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    /// Text shown as-is, e.g. a message returned by the auth service.
    Literal(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: NotificationText,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification whose message is the i18n key `message_key`.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text: NotificationText::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
            created_at: Instant::now(),
        }
    }

    /// Creates a notification that displays `text` without translation.
    pub fn literal(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            text: NotificationText::Literal(text.into()),
            ..Self::new(severity, "")
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an interpolation argument. Ignored for literal text.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NotificationText::Key { args, .. } = &mut self.text {
            args.push((key.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &NotificationText {
        &self.text
    }

    /// Returns the i18n key, or `None` for literal text.
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        match &self.text {
            NotificationText::Key { key, .. } => Some(key),
            NotificationText::Literal(_) => None,
        }
    }

    /// Whether the notification has been visible for longer than its severity allows.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn errors_are_transient() {
        assert_eq!(
            Severity::Error.auto_dismiss_duration(),
            Duration::from_secs(5)
        );
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration());
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let n = Notification::success("saved");
        let created = n.created_at;
        assert!(!n.is_expired_at(created + Duration::from_millis(2_900)));
        assert!(n.is_expired_at(created + Duration::from_secs(3)));
    }

    #[test]
    fn literal_text_ignores_args() {
        let n = Notification::literal(Severity::Error, "Wrong password.").with_arg("a", "b");
        assert_eq!(n.text(), &NotificationText::Literal("Wrong password.".into()));
        assert_eq!(n.message_key(), None);
    }

    #[test]
    fn key_text_collects_args() {
        let n = Notification::warning("config-warning").with_arg("path", "/tmp/x");
        assert_eq!(
            n.text(),
            &NotificationText::Key {
                key: "config-warning".into(),
                args: vec![("path".into(), "/tmp/x".into())],
            }
        );
    }
}
