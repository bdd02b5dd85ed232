use crate::domain::models::Notification;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(3);
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub created_at: Instant,
}

/// Auto-dismissing notifications, newest last. Oldest drop off once the
/// stack is full.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStore {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastStore {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.push_at(notification, Instant::now())
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(title = %notification.title, description = %notification.description, "toast");
        self.toasts.push_back(Toast {
            id,
            notification,
            created_at: now,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    pub fn expire(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < TOAST_TTL);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}
