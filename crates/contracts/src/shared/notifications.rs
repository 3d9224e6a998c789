//! Ядро центра уведомлений (toast).
//!
//! [`NotificationQueue`] не знает ничего о таймерах браузера: тип дескриптора
//! таймера `H` подставляет вызывающая сторона. Удаление дескриптора из очереди
//! означает отмену таймера (во фронтенде `Drop` у `gloo_timers::Timeout`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Время показа по умолчанию, мс.
pub const DEFAULT_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// `0` — never auto-dismiss
    pub duration_ms: u32,
}

impl Notification {
    pub fn auto_dismiss(&self) -> bool {
        self.duration_ms > 0
    }
}

/// Упорядоченная очередь живых уведомлений с дескрипторами таймеров.
///
/// Порядок вставки = порядок отображения (старые сверху).
#[derive(Debug)]
pub struct NotificationQueue<H> {
    next_id: u64,
    items: Vec<Notification>,
    timers: HashMap<NotificationId, H>,
}

impl<H> Default for NotificationQueue<H> {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
            timers: HashMap::new(),
        }
    }
}

impl<H> NotificationQueue<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns a copy of it.
    /// Ids come from a counter and are never reused.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, duration_ms: u32) -> Notification {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            kind,
            duration_ms,
        };
        self.items.push(notification.clone());
        notification
    }

    /// Stores the timer handle of a live notification.
    ///
    /// Returns the handle back when the id is no longer live or already has a
    /// timer, so the caller can cancel it.
    pub fn attach_timer(&mut self, id: NotificationId, handle: H) -> Option<H> {
        if !self.contains(id) || self.timers.contains_key(&id) {
            return Some(handle);
        }
        self.timers.insert(id, handle);
        None
    }

    /// User dismissal. Removes the notification and hands back its pending timer
    /// for cancellation. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<H> {
        self.remove_item(id);
        self.timers.remove(&id)
    }

    /// Timer fired. Same removal as [`dismiss`](Self::dismiss); the returned
    /// handle belongs to a timer that has already run.
    pub fn expire(&mut self, id: NotificationId) -> Option<H> {
        self.dismiss(id)
    }

    /// Teardown: drops every notification and returns all pending timers.
    pub fn clear(&mut self) -> Vec<H> {
        self.items.clear();
        self.timers.drain().map(|(_, handle)| handle).collect()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    pub fn has_timer(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn remove_item(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Handle that records its cancellation on drop, like a browser timeout.
    struct FakeTimer {
        id: NotificationId,
        cancelled: Rc<RefCell<Vec<NotificationId>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn notify(
        queue: &mut NotificationQueue<FakeTimer>,
        log: &Rc<RefCell<Vec<NotificationId>>>,
        message: &str,
        duration_ms: u32,
    ) -> NotificationId {
        let n = queue.push(message, NotificationKind::Info, duration_ms);
        if n.auto_dismiss() {
            let handle = FakeTimer {
                id: n.id,
                cancelled: log.clone(),
            };
            assert!(queue.attach_timer(n.id, handle).is_none());
        }
        n.id
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut queue = NotificationQueue::<()>::new();
        let a = queue.push("a", NotificationKind::Info, 0).id;
        let b = queue.push("b", NotificationKind::Info, 0).id;
        queue.dismiss(a);
        let c = queue.push("c", NotificationKind::Info, 0).id;

        assert!(a < b && b < c);
        assert_eq!(a.to_string(), "toast-1");
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut queue = NotificationQueue::<()>::new();
        queue.push("first", NotificationKind::Success, 0);
        queue.push("second", NotificationKind::Error, 0);
        queue.push("third", NotificationKind::Warning, 0);

        let messages: Vec<&str> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dismiss_cancels_pending_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let id = notify(&mut queue, &log, "Saved", DEFAULT_DURATION_MS);

        drop(queue.dismiss(id));
        assert!(queue.is_empty());
        assert_eq!(*log.borrow(), vec![id]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let keep = notify(&mut queue, &log, "keep", 0);
        let gone = notify(&mut queue, &log, "gone", 0);

        assert!(queue.dismiss(gone).is_none());
        assert!(queue.dismiss(gone).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(keep));
    }

    #[test]
    fn test_expire_after_dismiss_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let id = notify(&mut queue, &log, "race", 500);
        let other = notify(&mut queue, &log, "other", 0);

        drop(queue.dismiss(id));
        assert!(queue.expire(id).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(other));
    }

    #[test]
    fn test_zero_duration_never_gets_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let id = notify(&mut queue, &log, "Saved", 0);

        assert!(!queue.has_timer(id));
        assert!(queue.contains(id));
        drop(queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_attach_timer_rejects_dead_or_duplicate() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let id = notify(&mut queue, &log, "once", 100);

        let duplicate = FakeTimer { id, cancelled: log.clone() };
        assert!(queue.attach_timer(id, duplicate).is_some());

        drop(queue.dismiss(id));
        let late = FakeTimer { id, cancelled: log.clone() };
        assert!(queue.attach_timer(id, late).is_some());
        assert!(!queue.has_timer(id));
    }

    #[test]
    fn test_live_count_tracks_expirations_and_dismissals() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        let ids: Vec<_> = (0..5)
            .map(|i| notify(&mut queue, &log, &format!("n{i}"), 1000))
            .collect();

        drop(queue.expire(ids[0]));
        drop(queue.dismiss(ids[3]));
        drop(queue.dismiss(ids[3]));
        assert_eq!(queue.len(), 5 - 2);
    }

    #[test]
    fn test_clear_returns_all_timers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = NotificationQueue::new();
        notify(&mut queue, &log, "a", 100);
        notify(&mut queue, &log, "b", 0);
        notify(&mut queue, &log, "c", 100);

        let handles = queue.clear();
        assert_eq!(handles.len(), 2);
        drop(handles);
        assert!(queue.is_empty());
        assert_eq!(log.borrow().len(), 2);
    }
}
