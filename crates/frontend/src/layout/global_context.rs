use contracts::domain::a007_feed_notification::{self as feed, mock::mock_feed, FeedNotification};
use leptos::prelude::*;

/// Пользователь, от имени которого работает панель.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    pub fn initials(&self) -> String {
        contracts::shared::format::initials(&self.name)
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            role: "Admin".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub user_menu_open: RwSignal<bool>,
    pub current_user: RwSignal<CurrentUser>,
    /// Activity feed; the header bell and the Notifications page share it.
    pub feed: RwSignal<Vec<FeedNotification>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            user_menu_open: RwSignal::new(false),
            current_user: RwSignal::new(CurrentUser::default()),
            feed: RwSignal::new(mock_feed()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_user_menu(&self) {
        self.user_menu_open.update(|open| *open = !*open);
    }

    pub fn close_user_menu(&self) {
        self.user_menu_open.set(false);
    }

    pub fn unread_count(&self) -> Signal<usize> {
        let feed = self.feed;
        Signal::derive(move || feed.with(|items| feed::unread_count(items)))
    }

    pub fn mark_read(&self, id: u32) -> bool {
        let mut changed = false;
        self.feed.update(|items| changed = feed::mark_read(items, id));
        changed
    }

    /// Returns how many items changed state.
    pub fn mark_all_read(&self) -> usize {
        let mut marked = 0;
        self.feed.update(|items| marked = feed::mark_all_read(items));
        log::debug!("feed: {} item(s) marked read", marked);
        marked
    }

    pub fn delete_feed_item(&self, id: u32) {
        self.feed.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
