//! Bounded notification sink with transient toast tracking

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::config::NotificationsConfig;
use crate::error::{AppError, AppResult};
use crate::models::{new_id, AppNotification, NotificationKind};

struct ActiveToast {
    id: String,
    expires_at: DateTime<Utc>,
}

struct SinkState {
    /// Newest first, capped at the configured capacity
    entries: Vec<AppNotification>,
    toast: Option<ActiveToast>,
}

/// Append-only ring of transient messages. There is no UI timer thread;
/// toast auto-dismissal is modelled as a deadline checked on read.
#[derive(Clone)]
pub struct NotificationService {
    state: Arc<Mutex<SinkState>>,
    capacity: usize,
    toast_ttl: Duration,
}

impl NotificationService {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState {
                entries: Vec::new(),
                toast: None,
            })),
            capacity: config.capacity,
            toast_ttl: Duration::seconds(config.toast_seconds as i64),
        }
    }

    /// Prepend a notification, dropping the oldest beyond capacity, and make
    /// it the active toast.
    pub fn notify(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> AppResult<AppNotification> {
        let notification = AppNotification {
            id: new_id(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
            is_read: false,
        };

        let mut state = self.lock()?;
        state.entries.insert(0, notification.clone());
        state.entries.truncate(self.capacity);
        state.toast = Some(ActiveToast {
            id: notification.id.clone(),
            expires_at: notification.timestamp + self.toast_ttl,
        });
        tracing::debug!(kind = %kind, message = %notification.message, "notification");
        Ok(notification)
    }

    /// Current entries, newest first
    pub fn list(&self) -> AppResult<Vec<AppNotification>> {
        Ok(self.lock()?.entries.clone())
    }

    /// The toast to display at `now`, clearing it once its deadline passed
    pub fn active_toast(&self, now: DateTime<Utc>) -> AppResult<Option<AppNotification>> {
        let mut state = self.lock()?;
        match &state.toast {
            Some(toast) if now < toast.expires_at => {
                let id = toast.id.clone();
                Ok(state.entries.iter().find(|n| n.id == id).cloned())
            }
            Some(_) => {
                state.toast = None;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Explicit dismissal (the close button on the toast)
    pub fn dismiss_toast(&self) -> AppResult<()> {
        self.lock()?.toast = None;
        Ok(())
    }

    /// Flip every entry's read flag; called when the panel opens
    pub fn mark_all_read(&self) -> AppResult<()> {
        for entry in &mut self.lock()?.entries {
            entry.is_read = true;
        }
        Ok(())
    }

    pub fn unread_count(&self) -> AppResult<usize> {
        Ok(self.lock()?.entries.iter().filter(|n| !n.is_read).count())
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, SinkState>> {
        self.state
            .lock()
            .map_err(|_| AppError::Storage("notification sink lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(capacity: usize, toast_seconds: u64) -> NotificationService {
        NotificationService::new(&NotificationsConfig {
            capacity,
            toast_seconds,
        })
    }

    #[test]
    fn newest_first_and_oldest_dropped_at_capacity() {
        let sink = sink(3, 3);
        for i in 0..5 {
            sink.notify(format!("message {}", i), NotificationKind::Info)
                .unwrap();
        }
        let entries = sink.list().unwrap();
        let messages: Vec<_> = entries.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["message 4", "message 3", "message 2"]);
    }

    #[test]
    fn toast_expires_after_deadline() {
        let sink = sink(20, 3);
        let toast = sink.notify("saved", NotificationKind::Success).unwrap();

        let before = toast.timestamp + Duration::seconds(2);
        assert!(sink.active_toast(before).unwrap().is_some());

        let after = toast.timestamp + Duration::seconds(4);
        assert!(sink.active_toast(after).unwrap().is_none());
        // stays cleared
        assert!(sink.active_toast(before).unwrap().is_none());
    }

    #[test]
    fn newer_toast_supersedes_older_one() {
        let sink = sink(20, 3);
        sink.notify("first", NotificationKind::Info).unwrap();
        let second = sink.notify("second", NotificationKind::Info).unwrap();

        let shown = sink.active_toast(second.timestamp).unwrap().unwrap();
        assert_eq!(shown.message, "second");
    }

    #[test]
    fn mark_all_read_clears_unread_count() {
        let sink = sink(20, 3);
        sink.notify("a", NotificationKind::Info).unwrap();
        sink.notify("b", NotificationKind::Warning).unwrap();
        assert_eq!(sink.unread_count().unwrap(), 2);

        sink.mark_all_read().unwrap();
        assert_eq!(sink.unread_count().unwrap(), 0);
        assert!(sink.list().unwrap().iter().all(|n| n.is_read));
    }
}
