//! Notification sink trait definitions.
//!
//! The session core only ever *emits* notifications; displaying them is the
//! job of a [`NotificationSink`] (a toast area in the TUI, stderr in CLI
//! mode, a recorder in tests).
//!
//! Delivery is fire-and-forget from the core's point of view. Sinks may
//! report failures, but [`deliver`] logs and swallows them so a broken sink
//! can never fail an analysis.
//!
//! # Example
//!
//! ```rust
//! use codelab::notify::{Notification, NotificationSink};
//! use codelab::errors::NotifyError;
//!
//! struct LoggingSink;
//!
//! impl NotificationSink for LoggingSink {
//!     fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
//!         log::info!("{}: {}", notification.title, notification.description);
//!         Ok(())
//!     }
//! }
//! ```

use crate::errors::NotifyError;
use serde::Serialize;
use std::fmt;

/// A transient message with a title and a one-line description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Receiver of user-facing notifications.
///
/// # Implementation Requirements
///
/// - `notify` must be non-blocking and cheap
/// - it may be called from any thread
/// - returning `Err` is allowed; callers treat it as non-fatal
pub trait NotificationSink: Send + Sync + 'static {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Deliver a notification, logging and discarding any sink failure.
pub fn deliver(sink: &dyn NotificationSink, notification: &Notification) {
    if let Err(e) = sink.notify(notification) {
        log::warn!("Dropped notification \"{}\": {}", notification.title, e);
    }
}
