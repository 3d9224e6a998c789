use crate::shared::format::relative_long;
use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum ReportType {
        Revenue => "Revenue",
        Users => "Users",
        Products => "Products",
        System => "System",
        Analytics => "Analytics",
        Custom => "Custom",
    }
}

impl ReportType {
    pub fn description(self) -> &'static str {
        match self {
            ReportType::Revenue => "Sales, revenue and growth metrics",
            ReportType::Users => "User activity, signups and retention",
            ReportType::Products => "Product performance and adoption",
            ReportType::System => "Uptime, errors and performance",
            ReportType::Analytics => "Traffic, conversions and funnels",
            ReportType::Custom => "Build from any data source",
        }
    }
}

crate::labelled_enum! {
    pub enum ReportStatus {
        Generated => "Generated",
        Generating => "Generating",
        Failed => "Failed",
        Scheduled => "Scheduled",
    }
}

crate::labelled_enum! {
    pub enum ExportFormat {
        Pdf => "PDF",
        Csv => "CSV",
        Excel => "Excel",
        Json => "JSON",
    }
}

crate::labelled_enum! {
    pub enum ReportPeriod {
        Last7Days => "7d",
        Last30Days => "30d",
        LastQuarter => "90d",
        LastYear => "1y",
    }
}

impl ReportPeriod {
    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Last7Days => "Last 7 days",
            ReportPeriod::Last30Days => "Last 30 days",
            ReportPeriod::LastQuarter => "Last quarter",
            ReportPeriod::LastYear => "Last year",
        }
    }
}

crate::labelled_enum! {
    pub enum ScheduleFrequency {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u32,
    pub name: String,
    pub report_type: ReportType,
    pub period: String,
    pub status: ReportStatus,
    pub created_minutes_ago: u32,
    pub size: String,
    pub format: Option<ExportFormat>,
    pub scheduled: bool,
    pub next_run: Option<String>,
}

impl Report {
    pub fn created_label(&self) -> String {
        relative_long(self.created_minutes_ago)
    }

    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Generated
    }

    /// Created within the last week.
    pub fn is_recent(&self) -> bool {
        self.created_minutes_ago < 7 * 24 * 60
    }

    /// Placeholder body for the simulated download.
    pub fn to_text_document(&self) -> String {
        format!(
            "{}\nType: {}\nPeriod: {}\nStatus: {}\nFormat: {}\nSize: {}\n",
            self.name,
            self.report_type,
            self.period,
            self.status,
            self.format.map(ExportFormat::as_str).unwrap_or("—"),
            self.size
        )
    }
}

/// Report builder form.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub report_type: Option<ReportType>,
    pub name: String,
    pub period: ReportPeriod,
    pub format: ExportFormat,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            report_type: None,
            name: String::new(),
            period: ReportPeriod::Last30Days,
            format: ExportFormat::Pdf,
        }
    }
}

impl ReportDraft {
    /// The new report starts in `Generating`.
    pub fn build(&self, id: u32) -> Result<Report, ValidationError> {
        let report_type = self
            .report_type
            .ok_or(ValidationError::Required { field: "a report type" })?;
        let name = validation::required(&self.name, "a report name")?;
        Ok(Report {
            id,
            name: name.to_string(),
            report_type,
            period: self.period.label().to_string(),
            status: ReportStatus::Generating,
            created_minutes_ago: 0,
            size: "—".to_string(),
            format: Some(self.format),
            scheduled: false,
            next_run: None,
        })
    }
}

/// Schedule form. Recipients are a comma separated list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub report_type: ReportType,
    pub frequency: ScheduleFrequency,
    pub recipients: String,
    pub format: ExportFormat,
}

impl ScheduleRequest {
    /// Validated recipient addresses.
    pub fn recipients(&self) -> Result<Vec<String>, ValidationError> {
        validation::recipient_list(&self.recipients)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportFilter {
    Type,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSortKey {
    Name,
    Type,
    Status,
    CreatedAt,
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.period.as_str()]
    }
}

impl Filterable<ReportFilter> for Report {
    fn filter_value(&self, field: ReportFilter) -> &str {
        match field {
            ReportFilter::Type => self.report_type.as_str(),
            ReportFilter::Status => self.status.as_str(),
        }
    }
}

impl Sortable<ReportSortKey> for Report {
    fn sort_value(&self, key: ReportSortKey) -> SortValue<'_> {
        match key {
            ReportSortKey::Name => SortValue::Text(&self.name),
            ReportSortKey::Type => SortValue::Text(self.report_type.as_str()),
            ReportSortKey::Status => SortValue::Text(self.status.as_str()),
            // newer is greater, so descending shows the latest first
            ReportSortKey::CreatedAt => SortValue::Number(-f64::from(self.created_minutes_ago)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_report::mock::mock_reports;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};

    #[test]
    fn test_created_desc_is_newest_first() {
        let reports = mock_reports();
        let query = ListQuery::<ReportFilter, ReportSortKey>::new(ReportSortKey::CreatedAt, SortDirection::Descending);

        let ids: Vec<u32> = derive_view(&reports, &query).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4, 6, 5]);
    }

    #[test]
    fn test_status_filter() {
        let reports = mock_reports();
        let query = ListQuery::new(ReportSortKey::Name, SortDirection::Ascending)
            .with_filter(ReportFilter::Status, Selection::Only("Generated".into()));

        let view = derive_view(&reports, &query);
        assert_eq!(view.len(), 4);
        assert!(view.iter().all(|r| r.is_downloadable()));
    }

    #[test]
    fn test_draft_checks_type_before_name() {
        let mut draft = ReportDraft::default();
        draft.name = "Q3".to_string();
        assert_eq!(draft.build(7).unwrap_err().to_string(), "Please enter a report type");

        draft.report_type = Some(ReportType::Users);
        draft.name = "   ".to_string();
        assert_eq!(draft.build(7).unwrap_err().to_string(), "Please enter a report name");

        draft.name = "Churn".to_string();
        let report = draft.build(7).unwrap();
        assert_eq!(report.status, ReportStatus::Generating);
        assert_eq!(report.period, "Last 30 days");
        assert!(!report.is_downloadable());
    }

    #[test]
    fn test_schedule_rejects_bad_recipients() {
        let mut request = ScheduleRequest {
            report_type: ReportType::Revenue,
            frequency: ScheduleFrequency::Weekly,
            recipients: "a@example.com, nope".to_string(),
            format: ExportFormat::Pdf,
        };
        assert_eq!(
            request.recipients().unwrap_err().to_string(),
            "Invalid email addresses: nope"
        );

        request.recipients = "a@example.com, b@example.org".to_string();
        assert_eq!(request.recipients().unwrap().len(), 2);
    }

    #[test]
    fn test_created_label() {
        let reports = mock_reports();
        assert_eq!(reports[0].created_label(), "2 hours ago");
        assert_eq!(reports[1].created_label(), "15 minutes ago");
    }
}
