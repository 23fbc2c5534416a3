//! Short operator-facing notifications ("toasts").

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// One notification: a level, a title and a one-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Receives notifications from controllers. Front ends decide how to show them.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A [`Notifier`] that keeps everything it receives, in order.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every notification so far.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return every notification so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.entries().into_iter().filter(Notification::is_error).collect()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_order_and_drains() {
        let log = NotificationLog::new();
        log.notify(Notification::success("saved"));
        log.notify(Notification::error("failed"));

        assert_eq!(log.errors().len(), 1);
        let drained = log.drain();
        assert_eq!(drained[0].message, "saved");
        assert_eq!(drained[1].title, "Error");
        assert!(log.entries().is_empty());
    }
}
