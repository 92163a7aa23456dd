//! Notification sink implementations for different output modes.
//!
//! | Use Case | Implementation |
//! |----------|----------------|
//! | Unit tests | [`SilentNotificationSink`] or [`RecordingNotificationSink`] |
//! | Headless commands | [`CliNotificationSink`] |
//! | Machine-readable output | [`LogNotificationSink`] |
//! | TUI mode | See [`crate::tui::toast::ToastQueue`] |
//!
//! # Example: Using RecordingNotificationSink in Tests
//!
//! ```rust
//! use codelab::notify::{Notification, NotificationSink, RecordingNotificationSink};
//!
//! let recorder = RecordingNotificationSink::new();
//! recorder.notify(&Notification::new("Code Executed", "Output: 5")).unwrap();
//!
//! assert_eq!(recorder.titles(), vec!["Code Executed"]);
//! ```

use super::traits::{Notification, NotificationSink};
use crate::errors::NotifyError;
use colored::*;
use std::sync::{Arc, Mutex};

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotificationSink;

impl NotificationSink for SilentNotificationSink {
    #[inline]
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Sink that forwards notifications to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        log::info!("{}", notification);
        Ok(())
    }
}

/// Sink that prints notifications to stderr.
///
/// Stdout stays reserved for command output.
#[derive(Clone, Copy, Debug, Default)]
pub struct CliNotificationSink;

impl NotificationSink for CliNotificationSink {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        eprintln!(
            "{} - {}",
            notification.title.bold().green(),
            notification.description
        );
        Ok(())
    }
}

/// Sink that records notifications for assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.title)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.lock().push(notification.clone());
        Ok(())
    }
}
