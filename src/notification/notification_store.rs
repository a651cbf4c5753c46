//! Notification store
//!
//! Shared, mutex-guarded list of transient notifications. Every mutation and
//! every snapshot is taken under the lock, so readers never see a torn list
//! and concurrent `add` calls land in the order they acquired the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::theme;
use crate::theme::notification::NotificationColors;

/// How long a notification stays listed after creation
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

/// Unique notification identifier, never reused by a store
pub type NotificationId = u64;

/// Notification kind - determines the toast colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationKind::Success => &theme::notification::SUCCESS,
            NotificationKind::Error => &theme::notification::ERROR,
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    /// Whether the notification is past `ttl` as seen at `now`
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

#[derive(Debug)]
struct StoreInner {
    next_id: NotificationId,
    entries: Vec<Notification>,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// Cloneable handle to the shared notification list
///
/// Clones share the same list. The store is created once by the app and
/// passed to whoever needs to publish.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    inner: Arc<Mutex<StoreInner>>,
    ttl: Duration,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // A panic while holding the lock cannot leave the Vec half-written, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a notification and return its id. It drops out of [`list`]
    /// once the store's TTL has elapsed.
    ///
    /// [`list`]: NotificationStore::list
    pub fn add(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let message = message.into();
        let mut inner = self.lock();

        let id = inner.next_id;
        inner.next_id += 1;

        log::debug!("Notification {} added ({:?}): {}", id, kind, message);

        inner.entries.push(Notification {
            id,
            message,
            kind,
            created_at: Instant::now(),
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Error)
    }

    /// Remove a notification. Unknown or already removed ids are ignored.
    pub fn remove(&self, id: NotificationId) {
        self.lock().entries.retain(|n| n.id != id);
    }

    /// Dismiss the most recent live notification
    pub fn dismiss_latest(&self) -> Option<NotificationId> {
        let now = Instant::now();
        let mut inner = self.lock();
        let ttl = self.ttl;

        let index = inner
            .entries
            .iter()
            .rposition(|n| !n.is_expired_at(now, ttl))?;
        Some(inner.entries.remove(index).id)
    }

    /// Snapshot of live notifications in creation order
    pub fn list(&self) -> Vec<Notification> {
        self.list_at(Instant::now())
    }

    /// Snapshot of notifications still live at `now`
    pub fn list_at(&self, now: Instant) -> Vec<Notification> {
        self.lock()
            .entries
            .iter()
            .filter(|n| !n.is_expired_at(now, self.ttl))
            .cloned()
            .collect()
    }

    /// Drop expired entries, returns true if anything was removed
    pub fn remove_expired(&self) -> bool {
        let now = Instant::now();
        let mut inner = self.lock();
        let before = inner.entries.len();

        inner.entries.retain(|n| !n.is_expired_at(now, self.ttl));

        inner.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[cfg(test)]
#[path = "notification_store_tests.rs"]
mod notification_store_tests;
