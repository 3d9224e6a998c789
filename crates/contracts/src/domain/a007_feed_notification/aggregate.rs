use crate::shared::format::relative_long;
use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use crate::shared::notifications::NotificationKind;
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum FeedCategory {
        System => "system",
        User => "user",
        Security => "security",
        Billing => "billing",
    }
}

crate::labelled_enum! {
    pub enum Priority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

impl Priority {
    fn rank(self) -> f64 {
        match self {
            Priority::High => 3.0,
            Priority::Medium => 2.0,
            Priority::Low => 1.0,
        }
    }
}

pub const READ: &str = "read";
pub const UNREAD: &str = "unread";

/// Запись ленты активности. Не путать с всплывающим уведомлением.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedNotification {
    pub id: u32,
    pub kind: NotificationKind,
    pub category: FeedCategory,
    pub title: String,
    pub message: String,
    pub minutes_ago: u32,
    pub read: bool,
    pub priority: Option<Priority>,
}

impl FeedNotification {
    pub fn received_label(&self) -> String {
        relative_long(self.minutes_ago)
    }

    pub fn is_today(&self) -> bool {
        self.minutes_ago < 24 * 60
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Some(Priority::High) && !self.read
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedStats {
    pub total: usize,
    pub unread: usize,
    pub today: usize,
    pub high_priority: usize,
}

impl FeedStats {
    pub fn of(items: &[FeedNotification]) -> Self {
        Self {
            total: items.len(),
            unread: items.iter().filter(|n| !n.read).count(),
            today: items.iter().filter(|n| n.is_today()).count(),
            high_priority: items.iter().filter(|n| n.is_urgent()).count(),
        }
    }
}

pub fn mark_read(items: &mut [FeedNotification], id: u32) -> bool {
    match items.iter_mut().find(|n| n.id == id && !n.read) {
        Some(item) => {
            item.read = true;
            true
        }
        None => false,
    }
}

/// Returns how many entries changed.
pub fn mark_all_read(items: &mut [FeedNotification]) -> usize {
    let mut changed = 0;
    for item in items.iter_mut().filter(|n| !n.read) {
        item.read = true;
        changed += 1;
    }
    changed
}

pub fn unread_count(items: &[FeedNotification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedFilter {
    ReadState,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedSortKey {
    Received,
    Priority,
    Title,
}

impl Searchable for FeedNotification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }
}

impl Filterable<FeedFilter> for FeedNotification {
    fn filter_value(&self, field: FeedFilter) -> &str {
        match field {
            FeedFilter::ReadState => {
                if self.read {
                    READ
                } else {
                    UNREAD
                }
            }
            FeedFilter::Category => self.category.as_str(),
        }
    }
}

impl Sortable<FeedSortKey> for FeedNotification {
    fn sort_value(&self, key: FeedSortKey) -> SortValue<'_> {
        match key {
            // ascending = newest first
            FeedSortKey::Received => SortValue::Number(f64::from(self.minutes_ago)),
            FeedSortKey::Priority => SortValue::Number(self.priority.map(Priority::rank).unwrap_or(0.0)),
            FeedSortKey::Title => SortValue::Text(&self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_feed_notification::mock::mock_feed;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};

    #[test]
    fn test_stats() {
        let feed = mock_feed();
        let stats = FeedStats::of(&feed);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.unread, 4);
        assert_eq!(stats.today, 7);
        assert_eq!(stats.high_priority, 3);
    }

    #[test]
    fn test_unread_filter_newest_first() {
        let feed = mock_feed();
        let query = ListQuery::new(FeedSortKey::Received, SortDirection::Ascending)
            .with_filter(FeedFilter::ReadState, Selection::Only(UNREAD.into()));

        let titles: Vec<&str> = derive_view(&feed, &query).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "New user registered",
                "High error rate detected",
                "Payment failed",
                "Unusual login activity"
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let feed = mock_feed();
        let query = ListQuery::new(FeedSortKey::Received, SortDirection::Ascending)
            .with_filter(FeedFilter::Category, Selection::Only("billing".into()));
        assert_eq!(derive_view(&feed, &query).len(), 2);
    }

    #[test]
    fn test_mark_read() {
        let mut feed = mock_feed();
        assert!(mark_read(&mut feed, 1));
        assert!(!mark_read(&mut feed, 1));
        assert!(!mark_read(&mut feed, 999));
        assert_eq!(unread_count(&feed), 3);

        assert_eq!(mark_all_read(&mut feed), 3);
        assert_eq!(unread_count(&feed), 0);
        assert_eq!(mark_all_read(&mut feed), 0);
    }
}
