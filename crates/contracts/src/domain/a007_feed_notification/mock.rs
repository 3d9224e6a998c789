use super::aggregate::{FeedCategory, FeedNotification, Priority};
use crate::shared::notifications::NotificationKind;

const HOUR: u32 = 60;
const DAY: u32 = 24 * HOUR;

fn entry(
    id: u32,
    kind: NotificationKind,
    category: FeedCategory,
    title: &str,
    message: &str,
    minutes_ago: u32,
    read: bool,
    priority: Priority,
) -> FeedNotification {
    FeedNotification {
        id,
        kind,
        category,
        title: title.to_string(),
        message: message.to_string(),
        minutes_ago,
        read,
        priority: Some(priority),
    }
}

pub fn mock_feed() -> Vec<FeedNotification> {
    use FeedCategory::*;
    use NotificationKind as K;

    vec![
        entry(1, K::Success, User, "New user registered", "Jane Cooper has created an account", 2, false, Priority::Low),
        entry(2, K::Warning, System, "High error rate detected", "Error rate exceeded 5% threshold in the last hour", 15, false, Priority::High),
        entry(3, K::Info, System, "System backup completed", "Daily backup completed successfully at 02:00 UTC", HOUR, true, Priority::Low),
        entry(4, K::Error, Billing, "Payment failed", "Failed to process payment for subscription #1234", 2 * HOUR, false, Priority::High),
        entry(5, K::Success, System, "Report generated", "Monthly revenue report is ready for download", 3 * HOUR, true, Priority::Medium),
        entry(6, K::Info, System, "New feature available", "Advanced analytics dashboard is now available", DAY, true, Priority::Low),
        entry(7, K::Warning, Security, "Unusual login activity", "Login attempt from new location detected", 4 * HOUR, false, Priority::High),
        entry(8, K::Success, Billing, "Payment received", "Payment of $99.00 processed successfully", 5 * HOUR, true, Priority::Medium),
    ]
}
