use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    /// Период аналитики; метка = короткий код из URL/экспорта.
    pub enum TimeRange {
        Week => "7d",
        Month => "30d",
        Quarter => "90d",
        Year => "1y",
    }
}

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "7 Days",
            TimeRange::Month => "30 Days",
            TimeRange::Quarter => "90 Days",
            TimeRange::Year => "1 Year",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    /// `"Last 30 days"`
    pub fn caption(self) -> String {
        match self {
            TimeRange::Year => "Last 12 months".to_string(),
            other => format!("Last {} days", other.days()),
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Month
    }
}

/// KPI card. `improving` drives the arrow colour, not the sign of `change`:
/// a falling bounce rate is good news.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsMetric {
    pub label: String,
    pub value: String,
    pub change: String,
    pub improving: bool,
    pub icon: String,
}

fn metric(label: &str, value: &str, change: &str, improving: bool, icon: &str) -> AnalyticsMetric {
    AnalyticsMetric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        improving,
        icon: icon.to_string(),
    }
}

pub fn analytics_metrics() -> Vec<AnalyticsMetric> {
    vec![
        metric("Total Revenue", "$124,580", "+12.5%", true, "💰"),
        metric("Active Sessions", "8,432", "+8.2%", true, "👥"),
        metric("Conversion Rate", "3.24%", "-0.3%", false, "📊"),
        metric("Avg. Order Value", "$47.20", "+5.1%", true, "🛒"),
        metric("New Users", "1,234", "+15.3%", true, "✨"),
        metric("Bounce Rate", "32.1%", "-2.4%", true, "📉"),
    ]
}

/// Столбец графика выручки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub label: String,
    /// USD
    pub value: u64,
}

/// Revenue buckets for the range: days of the week, weeks of the month,
/// months of the quarter, quarters of the year.
pub fn revenue_trend(range: TimeRange) -> Vec<RevenuePoint> {
    let points: &[(&str, u64)] = match range {
        TimeRange::Week => &[
            ("Mon", 12_000),
            ("Tue", 15_000),
            ("Wed", 18_000),
            ("Thu", 14_000),
            ("Fri", 22_000),
            ("Sat", 19_000),
            ("Sun", 16_000),
        ],
        TimeRange::Month => &[
            ("Week 1", 98_000),
            ("Week 2", 104_500),
            ("Week 3", 111_200),
            ("Week 4", 116_000),
        ],
        TimeRange::Quarter => &[("Month 1", 402_000), ("Month 2", 438_500), ("Month 3", 455_300)],
        TimeRange::Year => &[
            ("Q1", 1_150_000),
            ("Q2", 1_236_000),
            ("Q3", 1_297_500),
            ("Q4", 1_356_800),
        ],
    };
    points
        .iter()
        .map(|&(label, value)| RevenuePoint {
            label: label.to_string(),
            value,
        })
        .collect()
}

pub fn revenue_total(points: &[RevenuePoint]) -> u64 {
    points.iter().map(|p| p.value).sum()
}

/// Доля `value` от `max` в процентах, 0..=100.
pub fn percent_of(value: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    (value.min(max) * 100 / max) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePerformance {
    pub path: String,
    pub views: u64,
    pub unique: u64,
    pub bounce_percent: u32,
    pub avg_time_secs: u32,
}

impl PagePerformance {
    /// `204` → `"3m 24s"`
    pub fn avg_time_label(&self) -> String {
        let (m, s) = (self.avg_time_secs / 60, self.avg_time_secs % 60);
        if m == 0 {
            format!("{s}s")
        } else {
            format!("{m}m {s}s")
        }
    }
}

pub fn top_pages() -> Vec<PagePerformance> {
    [
        ("/dashboard", 12_450, 8_230, 32, 204),
        ("/products", 9_870, 6_540, 28, 252),
        ("/users", 7_650, 5_120, 35, 165),
        ("/settings", 4_320, 3_210, 42, 118),
    ]
    .into_iter()
    .map(|(path, views, unique, bounce_percent, avg_time_secs)| PagePerformance {
        path: path.to_string(),
        views,
        unique,
        bounce_percent,
        avg_time_secs,
    })
    .collect()
}

/// Строка распределения: устройства, источники трафика, страны.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    /// Emoji flag for countries
    pub icon: Option<String>,
    pub percent: u32,
    /// Users or visits behind the percentage
    pub count: u64,
}

fn shares(rows: &[(&str, u32, u64)]) -> Vec<Share> {
    rows.iter()
        .map(|&(label, percent, count)| Share {
            label: label.to_string(),
            icon: None,
            percent,
            count,
        })
        .collect()
}

pub fn device_breakdown() -> Vec<Share> {
    shares(&[("Desktop", 62, 5_230), ("Mobile", 28, 2_360), ("Tablet", 10, 842)])
}

pub fn traffic_sources() -> Vec<Share> {
    shares(&[
        ("Direct", 45, 3_780),
        ("Search", 30, 2_520),
        ("Social", 15, 1_260),
        ("Referral", 10, 840),
    ])
}

pub fn top_countries() -> Vec<Share> {
    [
        ("United States", "🇺🇸", 42, 12_450),
        ("United Kingdom", "🇬🇧", 19, 5_670),
        ("Germany", "🇩🇪", 15, 4_320),
        ("France", "🇫🇷", 11, 3_210),
        ("Canada", "🇨🇦", 7, 2_100),
        ("Other", "🌍", 6, 1_750),
    ]
    .into_iter()
    .map(|(label, flag, percent, count)| Share {
        label: label.to_string(),
        icon: Some(flag.to_string()),
        percent,
        count,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInsight {
    pub title: String,
    pub value: String,
    pub description: String,
}

pub fn key_insights() -> Vec<KeyInsight> {
    [
        ("Peak traffic hours", "2:00 PM - 4:00 PM", "Most active user period"),
        ("Top converting page", "/products", "Highest conversion rate at 4.2%"),
        ("Mobile growth", "+18%", "Mobile users increased this month"),
        ("Returning visitors", "68%", "Above industry average"),
    ]
    .into_iter()
    .map(|(title, value, description)| KeyInsight {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// JSON export of the analytics page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsExport {
    pub range: TimeRange,
    pub metrics: Vec<AnalyticsMetric>,
    pub revenue: Vec<RevenuePoint>,
    pub revenue_total: u64,
    pub top_pages: Vec<PagePerformance>,
    pub devices: Vec<Share>,
    pub traffic_sources: Vec<Share>,
    pub countries: Vec<Share>,
    pub exported_at: String,
}

impl AnalyticsExport {
    pub fn collect(range: TimeRange, exported_at: String) -> Self {
        let revenue = revenue_trend(range);
        Self {
            range,
            metrics: analytics_metrics(),
            revenue_total: revenue_total(&revenue),
            revenue,
            top_pages: top_pages(),
            devices: device_breakdown(),
            traffic_sources: traffic_sources(),
            countries: top_countries(),
            exported_at,
        }
    }
}

/// Plain-text report for the "Generate Report" action.
pub fn analytics_report_text(export: &AnalyticsExport) -> String {
    let mut text = format!("Analytics Report ({})\n\n", export.range.caption());
    for m in &export.metrics {
        text.push_str(&format!("{}: {} ({})\n", m.label, m.value, m.change));
    }
    text.push_str(&format!("\nRevenue total: ${}\n", export.revenue_total));
    text.push_str("\nTop pages:\n");
    for p in &export.top_pages {
        text.push_str(&format!("  {} {} views, {}% bounce\n", p.path, p.views, p.bounce_percent));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_codes() {
        assert_eq!(TimeRange::parse("90d"), Some(TimeRange::Quarter));
        assert_eq!(TimeRange::default(), TimeRange::Month);
        assert_eq!(TimeRange::Week.label(), "7 Days");
        assert_eq!(TimeRange::Month.caption(), "Last 30 days");
        assert_eq!(TimeRange::Year.caption(), "Last 12 months");
        assert_eq!(serde_json::to_string(&TimeRange::Year).unwrap(), "\"1y\"");
    }

    #[test]
    fn test_weekly_revenue_total() {
        let week = revenue_trend(TimeRange::Week);
        assert_eq!(week.len(), 7);
        assert_eq!(week[4].label, "Fri");
        assert_eq!(revenue_total(&week), 116_000);
        assert_eq!(revenue_trend(TimeRange::Year).len(), 4);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(11_000, 22_000), 50);
        assert_eq!(percent_of(22_000, 22_000), 100);
        assert_eq!(percent_of(30, 20), 100);
        assert_eq!(percent_of(5, 0), 0);
    }

    #[test]
    fn test_avg_time_label() {
        let pages = top_pages();
        assert_eq!(pages[0].avg_time_label(), "3m 24s");
        let short = PagePerformance { avg_time_secs: 42, ..pages[0].clone() };
        assert_eq!(short.avg_time_label(), "42s");
    }

    #[test]
    fn test_breakdowns_add_up() {
        for rows in [device_breakdown(), traffic_sources(), top_countries()] {
            let total: u32 = rows.iter().map(|s| s.percent).sum();
            assert_eq!(total, 100);
        }
        assert!(top_countries().iter().all(|c| c.icon.is_some()));
    }

    #[test]
    fn test_report_text() {
        let export = AnalyticsExport::collect(TimeRange::Week, "2024-03-01T00:00:00Z".to_string());
        let text = analytics_report_text(&export);
        assert!(text.starts_with("Analytics Report (Last 7 days)"));
        assert!(text.contains("Bounce Rate: 32.1% (-2.4%)\n"));
        assert!(text.contains("Revenue total: $116000\n"));
        assert!(text.contains("/products 9870 views, 28% bounce"));

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["range"], "7d");
        assert_eq!(json["revenueTotal"], 116_000);
    }
}
