use crate::domain::a001_user::User;
use crate::domain::a002_product::Product;
use serde::{Deserialize, Serialize};

/// KPI card of the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetric {
    pub label: String,
    /// Display value, e.g. `"$18,920"`
    pub value: String,
    /// Display change, e.g. `"+6.1%"`; `None` when stable
    pub change: Option<String>,
    /// Change in percent for the trend arrow
    pub change_percent: Option<f64>,
    /// Period the change is compared to
    pub compared_to: String,
}

fn metric(
    label: &str,
    value: &str,
    change: Option<&str>,
    change_percent: Option<f64>,
    compared_to: &str,
) -> OverviewMetric {
    OverviewMetric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.map(str::to_string),
        change_percent,
        compared_to: compared_to.to_string(),
    }
}

pub fn overview_metrics() -> Vec<OverviewMetric> {
    vec![
        metric("Active Users", "2,451", Some("+18.3%"), Some(18.3), "vs last week"),
        metric("Monthly Recurring", "$18,920", Some("+6.1%"), Some(6.1), "vs last month"),
        metric("Error Rate", "0.47%", None, None, "Stable"),
        metric("Response Time", "142ms", Some("-12ms"), Some(-7.8), "vs last week"),
    ]
}

/// Доля трафика по каналу, проценты.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: String,
    pub percent: u32,
}

pub fn traffic_by_channel() -> Vec<ChannelShare> {
    [("Organic", 42), ("Paid", 27), ("Referral", 19), ("Other", 12)]
        .into_iter()
        .map(|(channel, percent)| ChannelShare {
            channel: channel.to_string(),
            percent,
        })
        .collect()
}

/// Most recently active users first; never-seen invitations go last.
pub fn recent_users(users: &[User], limit: usize) -> Vec<&User> {
    let mut seen: Vec<&User> = users.iter().collect();
    seen.sort_by_key(|u| u.last_seen_minutes.unwrap_or(u32::MAX));
    seen.truncate(limit);
    seen
}

/// Highest revenue first.
pub fn top_products(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.revenue_amount().total_cmp(&a.revenue_amount()));
    ranked.truncate(limit);
    ranked
}

/// JSON export of the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewExport {
    pub metrics: Vec<OverviewMetric>,
    pub traffic: Vec<ChannelShare>,
    pub exported_at: String,
}

/// Plain-text export of the overview page.
pub fn overview_report_text(metrics: &[OverviewMetric]) -> String {
    let mut text = String::from("Dashboard Export Report\n\n");
    for m in metrics {
        match &m.change {
            Some(change) => text.push_str(&format!("{}: {} ({})\n", m.label, m.value, change)),
            None => text.push_str(&format!("{}: {}\n", m.label, m.value)),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::mock::mock_users;
    use crate::domain::a002_product::mock::mock_products;

    #[test]
    fn test_top_products_by_revenue() {
        let products = mock_products();
        let top = top_products(&products, 3);
        let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Enterprise License", "Basic Plan", "Premium Plan"]);
    }

    #[test]
    fn test_recent_users_skip_invitations() {
        let users = mock_users();
        let recent = recent_users(&users, 3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].name, "Jane Cooper");
        assert!(recent.iter().all(|u| u.last_seen_minutes.is_some()));
    }

    #[test]
    fn test_report_text_lists_every_metric() {
        let metrics = overview_metrics();
        let text = overview_report_text(&metrics);
        assert!(text.starts_with("Dashboard Export Report"));
        assert!(text.contains("Monthly Recurring: $18,920 (+6.1%)"));
        assert!(text.contains("Error Rate: 0.47%\n"));
    }

    #[test]
    fn test_traffic_adds_up() {
        let total: u32 = traffic_by_channel().iter().map(|c| c.percent).sum();
        assert_eq!(total, 100);
    }
}
