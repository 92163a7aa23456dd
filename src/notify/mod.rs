//! User-facing notifications (toasts).

pub mod implementations;
pub mod traits;

pub use implementations::{
    CliNotificationSink, LogNotificationSink, RecordingNotificationSink, SilentNotificationSink,
};
pub use traits::{deliver, Notification, NotificationSink};
