use contracts::shared::notifications::{
    Notification, NotificationId, NotificationKind, NotificationQueue, DEFAULT_DURATION_MS,
};
use contracts::shared::validation::ValidationError;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Таймер автоскрытия. Удаление дескриптора отменяет таймер.
pub trait ToastTimer: Sized + 'static {
    fn start(duration_ms: u32, on_fire: impl FnOnce() + 'static) -> Self;

    /// Called with the handle whose callback is currently running.
    fn release_fired(self) {}
}

impl ToastTimer for Timeout {
    fn start(duration_ms: u32, on_fire: impl FnOnce() + 'static) -> Self {
        Timeout::new(duration_ms, on_fire)
    }

    // Дескриптор сработавшего таймера освобождаем после выхода из его колбэка.
    fn release_fired(self) {
        spawn_local(async move {
            drop(self);
        });
    }
}

/// Сервис всплывающих уведомлений, общий для всего приложения.
///
/// Очередь живёт в локальном хранилище (дескрипторы `Timeout` не `Send`),
/// наружу отдаётся только сигнал со снимком для отрисовки.
pub struct NotificationCenter<T: ToastTimer = Timeout> {
    items: RwSignal<Vec<Notification>>,
    queue: StoredValue<NotificationQueue<T>, LocalStorage>,
}

impl<T: ToastTimer> Clone for NotificationCenter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ToastTimer> Copy for NotificationCenter<T> {}

impl NotificationCenter<Timeout> {
    /// Creates the center in the current reactive owner. Pending timers are
    /// cancelled when the owner is cleaned up.
    pub fn new() -> Self {
        Self::with_timer()
    }
}

impl<T: ToastTimer> NotificationCenter<T> {
    pub fn with_timer() -> Self {
        let center = Self {
            items: RwSignal::new(Vec::new()),
            queue: StoredValue::new_local(NotificationQueue::new()),
        };

        on_cleanup(move || {
            let pending = center.queue.try_update_value(|q| q.clear()).unwrap_or_default();
            log::debug!("notification center teardown, {} timer(s) cancelled", pending.len());
            drop(pending);
        });

        center
    }

    /// Live notifications, oldest first.
    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    /// Shows a message. `duration_ms == 0` keeps it until dismissed.
    ///
    /// Returns `None` only after the center has been torn down.
    pub fn notify(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u32,
    ) -> Option<NotificationId> {
        let message = message.into();
        let notification = self
            .queue
            .try_update_value(|q| q.push(message, kind, duration_ms))?;
        let id = notification.id;
        log::debug!("notify {id} [{}] {:?}", kind.as_str(), notification.message);

        if notification.auto_dismiss() {
            let center = *self;
            let handle = T::start(duration_ms, move || center.expire(id));
            // Some(handle) = id already gone, the handle is dropped and the timer cancelled.
            let rejected = self.queue.try_update_value(|q| q.attach_timer(id, handle));
            drop(rejected);
        }

        self.sync();
        Some(id)
    }

    pub fn notify_kind(&self, message: impl Into<String>, kind: NotificationKind) -> Option<NotificationId> {
        self.notify(message, kind, DEFAULT_DURATION_MS)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.notify_kind(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.notify_kind(message, NotificationKind::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.notify_kind(message, NotificationKind::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.notify_kind(message, NotificationKind::Info)
    }

    /// Empty field → warning, malformed input → error.
    pub fn validation_failed(&self, err: &ValidationError) -> Option<NotificationId> {
        self.notify_kind(err.to_string(), err.kind())
    }

    /// Removes the notification and cancels its timer. Unknown ids are ignored.
    pub fn dismiss(&self, id: NotificationId) {
        let Some(timer) = self.queue.try_update_value(|q| q.dismiss(id)) else {
            return;
        };
        log::debug!("dismiss {id}, timer cancelled: {}", timer.is_some());
        drop(timer);
        self.sync();
    }

    fn expire(&self, id: NotificationId) {
        let fired = self.queue.try_update_value(|q| q.expire(id)).flatten();
        log::debug!("expire {id}");
        self.sync();

        if let Some(handle) = fired {
            handle.release_fired();
        }
    }

    fn sync(&self) {
        if let Some(snapshot) = self.queue.try_with_value(|q| q.items().to_vec()) {
            self.items.set(snapshot);
        }
    }
}

impl Default for NotificationCenter<Timeout> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().expect("NotificationCenter not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::RefCell;

    thread_local! {
        static SCHEDULED: RefCell<Vec<Option<Box<dyn FnOnce()>>>> = RefCell::new(Vec::new());
        static CANCELLED: RefCell<Vec<usize>> = RefCell::new(Vec::new());
    }

    /// Manually fired timer. Dropping it before [`fire`] counts as cancellation.
    struct ManualTimer {
        slot: usize,
    }

    impl ToastTimer for ManualTimer {
        fn start(_duration_ms: u32, on_fire: impl FnOnce() + 'static) -> Self {
            let slot = SCHEDULED.with(|s| {
                let mut s = s.borrow_mut();
                s.push(Some(Box::new(on_fire)));
                s.len() - 1
            });
            ManualTimer { slot }
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            let pending = SCHEDULED.with(|s| s.borrow_mut()[self.slot].take().is_some());
            if pending {
                CANCELLED.with(|c| c.borrow_mut().push(self.slot));
            }
        }
    }

    fn fire(slot: usize) {
        let callback = SCHEDULED.with(|s| s.borrow_mut()[slot].take());
        if let Some(callback) = callback {
            callback();
        }
    }

    fn cancelled() -> Vec<usize> {
        CANCELLED.with(|c| c.borrow().clone())
    }

    fn messages(center: &NotificationCenter<ManualTimer>) -> Vec<String> {
        center.items().get_untracked().into_iter().map(|n| n.message).collect()
    }

    #[test]
    fn test_center_tracks_queue_and_cancels_on_cleanup() {
        let owner = Owner::new();
        let center = owner.with(NotificationCenter::<ManualTimer>::with_timer);

        // slot 0
        let saved = center.success("Saved").expect("center alive");
        // без таймера
        center.notify("Pinned", NotificationKind::Info, 0);
        // slot 1
        center.error("Upload failed");
        assert_eq!(messages(&center), vec!["Saved", "Pinned", "Upload failed"]);
        assert_eq!(center.items().get_untracked()[2].kind, NotificationKind::Error);

        center.dismiss(saved);
        assert_eq!(messages(&center), vec!["Pinned", "Upload failed"]);
        assert_eq!(cancelled(), vec![0]);

        fire(1);
        assert_eq!(messages(&center), vec!["Pinned"]);
        assert_eq!(cancelled(), vec![0]);

        // slot 2, остаётся висеть до очистки владельца
        center.warning("Session expiring");
        owner.cleanup();

        assert_eq!(cancelled(), vec![0, 2]);
        assert!(center.info("After teardown").is_none());
    }
}
