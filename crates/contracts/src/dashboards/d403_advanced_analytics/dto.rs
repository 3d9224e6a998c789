use crate::dashboards::d402_analytics::TimeRange;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum FocusMetric {
        Revenue => "revenue",
        Users => "users",
        Conversion => "conversion",
        Retention => "retention",
    }
}

crate::labelled_enum! {
    pub enum ChartStyle {
        Line => "line",
        Bar => "bar",
        Area => "area",
    }
}

crate::labelled_enum! {
    pub enum Impact {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// Сводка по метрике для карточки выбора.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricHeadline {
    pub value: &'static str,
    pub change: &'static str,
    pub improving: bool,
}

impl FocusMetric {
    pub fn label(self) -> &'static str {
        match self {
            FocusMetric::Revenue => "Revenue",
            FocusMetric::Users => "Users",
            FocusMetric::Conversion => "Conversion",
            FocusMetric::Retention => "Retention",
        }
    }

    pub fn headline(self) -> MetricHeadline {
        let (value, change, improving) = match self {
            FocusMetric::Revenue => ("$124,580", "+23%", true),
            FocusMetric::Users => ("8,432", "+18%", true),
            FocusMetric::Conversion => ("3.24%", "-0.3%", false),
            FocusMetric::Retention => ("68%", "+5%", true),
        };
        MetricHeadline { value, change, improving }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            FocusMetric::Revenue => "Revenue Trend",
            FocusMetric::Users => "User Growth",
            FocusMetric::Conversion => "Conversion Rate",
            FocusMetric::Retention => "Retention Rate",
        }
    }

    fn seed(self) -> u64 {
        match self {
            FocusMetric::Revenue => 104_729,
            FocusMetric::Users => 15_485_863,
            FocusMetric::Conversion => 32_452_843,
            FocusMetric::Retention => 49_979_687,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub date: NaiveDate,
    pub value: u64,
}

impl SeriesValue {
    /// `"Mar 5"`
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// `"YYYY-MM-DD"` (the date part of an ISO timestamp is enough).
pub fn parse_day(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso.get(..10)?, "%Y-%m-%d").ok()
}

/// Every fifth bar carries a date label.
pub const TICK_EVERY: usize = 5;

/// Daily points ending yesterday; a year is sampled weekly.
/// Values are pseudo-random in `5_000..15_000` but stable per metric.
pub fn metric_series(metric: FocusMetric, range: TimeRange, today: NaiveDate) -> Vec<SeriesValue> {
    let (count, step) = match range {
        TimeRange::Year => (52, 7),
        other => (other.days() as i64, 1),
    };
    (0..count)
        .map(|i| {
            let date = today - Duration::days((count - i) * step);
            let noise = (i as u64 * 7_919 + metric.seed()) % 10_000;
            SeriesValue {
                date,
                value: 5_000 + noise,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub recommendation: String,
}

pub fn insights() -> Vec<Insight> {
    use Impact::*;
    [
        (
            "Revenue Growth Trend",
            "Revenue has increased by 23% over the last 30 days",
            High,
            "Continue current marketing strategy",
        ),
        (
            "User Retention Decline",
            "Week 2 retention dropped by 5% compared to last month",
            Medium,
            "Review onboarding process and user engagement",
        ),
        (
            "Conversion Rate Optimization",
            "A/B test shows 12% improvement in sign-up conversion",
            High,
            "Implement winning variant across all pages",
        ),
        (
            "Peak Traffic Hours",
            "Traffic peaks between 2-4 PM, consider scheduling campaigns",
            Low,
            "Schedule important announcements during peak hours",
        ),
    ]
    .into_iter()
    .map(|(title, description, impact, recommendation)| Insight {
        title: title.to_string(),
        description: description.to_string(),
        impact,
        recommendation: recommendation.to_string(),
    })
    .collect()
}

/// Сколько инсайтов показывать в карточке рядом с графиком.
pub const KEY_INSIGHTS_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u64,
    /// Share of the first stage, one decimal
    pub percent: f64,
}

/// Percentages are relative to the first stage.
pub fn conversion_funnel() -> Vec<FunnelStage> {
    let stages = [
        ("Visitors", 10_000u64),
        ("Sign-ups", 2_500),
        ("Trials", 1_200),
        ("Purchases", 450),
        ("Active Users", 320),
    ];
    let top = stages[0].1;
    stages
        .into_iter()
        .map(|(stage, count)| FunnelStage {
            stage: stage.to_string(),
            count,
            percent: funnel_percent(count, top),
        })
        .collect()
}

pub fn funnel_percent(count: u64, top: u64) -> f64 {
    if top == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / top as f64).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPoint {
    pub period: String,
    pub percent: u32,
}

pub fn retention_curve() -> Vec<RetentionPoint> {
    [
        ("Week 1", 100),
        ("Week 2", 75),
        ("Week 3", 58),
        ("Week 4", 45),
        ("Week 8", 32),
        ("Week 12", 25),
    ]
    .into_iter()
    .map(|(period, percent)| RetentionPoint {
        period: period.to_string(),
        percent,
    })
    .collect()
}

/// Активные пользователи когорты по неделям.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub cohort: String,
    pub weeks: [u32; 4],
}

impl Cohort {
    /// Last week as a share of the first, whole percent.
    pub fn retained_percent(&self) -> u32 {
        match self.weeks[0] {
            0 => 0,
            first => self.weeks[3] * 100 / first,
        }
    }
}

pub fn cohorts() -> Vec<Cohort> {
    [
        ("Jan 2024", [100, 85, 72, 65]),
        ("Feb 2024", [120, 98, 85, 78]),
        ("Mar 2024", [150, 125, 110, 95]),
    ]
    .into_iter()
    .map(|(cohort, weeks)| Cohort {
        cohort: cohort.to_string(),
        weeks,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub value: String,
    pub confidence_percent: u32,
    pub period: String,
}

pub fn predictions() -> Vec<Prediction> {
    [
        ("Revenue Forecast", "$145,000", 85, "Next 30 days"),
        ("User Growth", "9,200", 78, "Next 30 days"),
        ("Churn Risk", "12%", 72, "Next 7 days"),
    ]
    .into_iter()
    .map(|(prediction, value, confidence_percent, period)| Prediction {
        prediction: prediction.to_string(),
        value: value.to_string(),
        confidence_percent,
        period: period.to_string(),
    })
    .collect()
}

/// JSON export of the advanced analytics page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedAnalyticsExport {
    pub metric: FocusMetric,
    pub range: TimeRange,
    pub series: Vec<SeriesValue>,
    pub funnel: Vec<FunnelStage>,
    pub retention: Vec<RetentionPoint>,
    pub cohorts: Vec<Cohort>,
    pub insights: Vec<Insight>,
    pub exported_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_series_ends_yesterday() {
        let today = day("2024-03-31");
        let series = metric_series(FocusMetric::Revenue, TimeRange::Month, today);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, day("2024-03-01"));
        assert_eq!(series[29].date, day("2024-03-30"));
        assert_eq!(series[0].label(), "Mar 1");
        assert!(series.iter().all(|p| (5_000..15_000).contains(&p.value)));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2024-03-15T14:02:26.123Z"), Some(day("2024-03-15")));
        assert_eq!(parse_day("2024-03-15"), Some(day("2024-03-15")));
        assert_eq!(parse_day("15.03.2024"), None);
        assert_eq!(parse_day("2024"), None);
    }

    #[test]
    fn test_series_is_stable_per_metric() {
        let today = day("2024-03-31");
        let revenue = metric_series(FocusMetric::Revenue, TimeRange::Week, today);
        assert_eq!(revenue, metric_series(FocusMetric::Revenue, TimeRange::Week, today));
        assert_ne!(revenue, metric_series(FocusMetric::Users, TimeRange::Week, today));
    }

    #[test]
    fn test_year_is_sampled_weekly() {
        let series = metric_series(FocusMetric::Users, TimeRange::Year, day("2024-12-31"));
        assert_eq!(series.len(), 52);
        assert_eq!(series[1].date - series[0].date, Duration::days(7));
    }

    #[test]
    fn test_funnel_relative_to_first_stage() {
        let funnel = conversion_funnel();
        let percents: Vec<f64> = funnel.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![100.0, 25.0, 12.0, 4.5, 3.2]);
        assert_eq!(funnel_percent(1, 0), 0.0);
    }

    #[test]
    fn test_cohort_retention() {
        let rows = cohorts();
        assert_eq!(rows[0].retained_percent(), 65);
        assert_eq!(rows[2].retained_percent(), 63);
        let empty = Cohort { cohort: "Apr 2024".to_string(), weeks: [0; 4] };
        assert_eq!(empty.retained_percent(), 0);
    }

    #[test]
    fn test_headlines_and_titles() {
        assert_eq!(FocusMetric::Conversion.headline().value, "3.24%");
        assert!(!FocusMetric::Conversion.headline().improving);
        assert_eq!(FocusMetric::Users.chart_title(), "User Growth");
        assert_eq!(insights().iter().filter(|i| i.impact == Impact::High).count(), 2);
    }
}
