//! Transient notifications shown at the bottom of the lab.

use crate::errors::NotifyError;
use crate::notify::{Notification, NotificationSink};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    posted_at: Instant,
}

/// Notification sink backing the lab's toast line.
///
/// Cloning shares the queue, so the controller's sink and the renderer
/// see the same toasts. The newest unexpired toast is displayed.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
        }
    }

    /// Post a notification as of `now`.
    pub fn push_at(&self, notification: Notification, now: Instant) -> Result<(), NotifyError> {
        let mut toasts = self.lock()?;
        toasts.push_back(Toast {
            notification,
            posted_at: now,
        });
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
        Ok(())
    }

    /// Newest toast still visible at `now`; expired toasts are dropped.
    pub fn current_at(&self, now: Instant) -> Option<Notification> {
        let mut toasts = self.lock().ok()?;
        let ttl = self.ttl;
        toasts.retain(|toast| now.saturating_duration_since(toast.posted_at) < ttl);
        toasts.back().map(|toast| toast.notification.clone())
    }

    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|toasts| toasts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, VecDeque<Toast>>, NotifyError> {
        self.toasts
            .lock()
            .map_err(|_| NotifyError::Unavailable("toast queue lock poisoned".into()))
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        log::debug!("Toast: {}", notification);
        self.push_at(notification.clone(), Instant::now())
    }
}
