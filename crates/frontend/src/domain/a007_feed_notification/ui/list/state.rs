use crate::shared::list_state::ListState;
use contracts::domain::a007_feed_notification::{FeedFilter, FeedSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type FeedListState = ListState<FeedFilter, FeedSortKey>;

/// Пункты выпадающего списка сортировки: (value, label, key, direction).
pub const SORT_OPTIONS: &[(&str, &str, FeedSortKey, SortDirection)] = &[
    ("newest", "Newest first", FeedSortKey::Received, SortDirection::Ascending),
    ("oldest", "Oldest first", FeedSortKey::Received, SortDirection::Descending),
    ("priority", "Priority", FeedSortKey::Priority, SortDirection::Descending),
    ("title", "Title A-Z", FeedSortKey::Title, SortDirection::Ascending),
];

pub fn create_state() -> RwSignal<FeedListState> {
    RwSignal::new(ListState::new(FeedSortKey::Received, SortDirection::Ascending))
}

pub fn sort_option_value(key: FeedSortKey, direction: SortDirection) -> &'static str {
    SORT_OPTIONS
        .iter()
        .find(|(_, _, k, d)| *k == key && *d == direction)
        .map(|(value, ..)| *value)
        .unwrap_or("newest")
}

pub fn sort_option(value: &str) -> Option<(FeedSortKey, SortDirection)> {
    SORT_OPTIONS
        .iter()
        .find(|(v, ..)| *v == value)
        .map(|(_, _, key, direction)| (*key, *direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_lookup() {
        assert_eq!(sort_option("priority"), Some((FeedSortKey::Priority, SortDirection::Descending)));
        assert_eq!(sort_option("bogus"), None);
        assert_eq!(sort_option_value(FeedSortKey::Received, SortDirection::Descending), "oldest");
        // title descending has no entry
        assert_eq!(sort_option_value(FeedSortKey::Title, SortDirection::Descending), "newest");
    }
}
