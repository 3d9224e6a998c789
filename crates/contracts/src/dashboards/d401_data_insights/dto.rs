use crate::domain::{
    a001_user::{mock::mock_users, User},
    a002_product::{mock::mock_products, Product},
    a003_content::{mock::mock_content, ContentItem},
    a004_file::{mock::mock_files, FileItem},
    a005_report::{mock::mock_reports, Report},
    a006_custom_field::{mock::mock_custom_fields, CustomField},
};
use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum KpiCategory {
        Revenue => "Revenue",
        Marketing => "Marketing",
        Retention => "Retention",
        Satisfaction => "Satisfaction",
        Operations => "Operations",
    }
}

crate::labelled_enum! {
    pub enum KpiUnit {
        Currency => "Currency",
        Percent => "Percent",
        Count => "Count",
    }
}

crate::labelled_enum! {
    pub enum Trend {
        Up => "up",
        Down => "down",
    }
}

crate::labelled_enum! {
    pub enum DataSource {
        Revenue => "Revenue",
        Users => "Users",
        Sales => "Sales",
    }
}

crate::labelled_enum! {
    pub enum ImportTable {
        Users => "Users",
        Products => "Products",
        Orders => "Orders",
        Custom => "Custom",
    }
}

crate::labelled_enum! {
    pub enum BackupKind {
        Full => "Full Backup",
        Incremental => "Incremental Backup",
    }
}

crate::labelled_enum! {
    pub enum BackupStatus {
        Completed => "completed",
        InProgress => "in-progress",
        Scheduled => "scheduled",
        Failed => "failed",
    }
}

/// Пользовательский KPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: u32,
    pub name: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub target: String,
    pub category: KpiCategory,
}

fn kpi(
    id: u32,
    name: &str,
    value: &str,
    change: &str,
    trend: Trend,
    target: &str,
    category: KpiCategory,
) -> Kpi {
    Kpi {
        id,
        name: name.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
        target: target.to_string(),
        category,
    }
}

pub fn mock_kpis() -> Vec<Kpi> {
    use KpiCategory::*;
    use Trend::*;

    vec![
        kpi(1, "Monthly Recurring Revenue", "$124,580", "+12.5%", Up, "$150,000", Revenue),
        kpi(2, "Customer Acquisition Cost", "$45.20", "-8.3%", Down, "$40.00", Marketing),
        kpi(3, "Churn Rate", "2.4%", "-0.5%", Down, "2%", Retention),
        kpi(4, "Net Promoter Score", "72", "+5", Up, "75", Satisfaction),
        kpi(5, "Average Revenue Per User", "$47.20", "+5.1%", Up, "$50.00", Revenue),
    ]
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `150000` as Currency → `"$150,000"`, `2.5` as Percent → `"2.5%"`.
pub fn format_target(value: f64, unit: KpiUnit) -> String {
    let whole = value.fract() == 0.0;
    match unit {
        KpiUnit::Currency if whole => format!("${}", group_thousands(value.abs() as u64)),
        KpiUnit::Currency => format!("${:.2}", value),
        KpiUnit::Percent => format!("{}%", value),
        KpiUnit::Count if whole => group_thousands(value.abs() as u64),
        KpiUnit::Count => value.to_string(),
    }
}

/// Форма "Create Custom KPI".
#[derive(Debug, Clone, PartialEq)]
pub struct KpiDraft {
    pub name: String,
    pub category: KpiCategory,
    pub unit: KpiUnit,
    pub target: String,
}

impl Default for KpiDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: KpiCategory::Revenue,
            unit: KpiUnit::Currency,
            target: String::new(),
        }
    }
}

impl KpiDraft {
    /// A new KPI has no measurements yet.
    pub fn build(&self, id: u32) -> Result<Kpi, ValidationError> {
        let name = validation::required(&self.name, "a KPI name")?;
        let target = validation::number(&self.target, "a target value")?;
        Ok(Kpi {
            id,
            name: name.to_string(),
            value: "—".to_string(),
            change: "0%".to_string(),
            trend: Trend::Up,
            target: format_target(target, self.unit),
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Days back from today, 0 = today
    pub days_ago: u32,
    pub value: i64,
}

impl DataSource {
    fn base_value(self) -> i64 {
        match self {
            DataSource::Revenue => 10_000,
            DataSource::Users => 500,
            DataSource::Sales => 2_000,
        }
    }
}

/// Детерминированный ряд для графика: базовое значение плюс колебание.
/// Oldest point first.
pub fn time_series(source: DataSource, days: u32) -> Vec<SeriesPoint> {
    let base = source.base_value();
    let amplitude = base / 4;
    (0..days)
        .map(|i| {
            let days_ago = days - i;
            // fixed pseudo-noise, same series on every render
            let noise = (i as i64 * 7_919 + 104_729) % 1_000;
            let value = base + amplitude * (noise - 500) / 500;
            SeriesPoint { days_ago, value }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub id: u32,
    pub name: String,
    pub kind: BackupKind,
    pub status: BackupStatus,
    pub size: String,
    /// `YYYY-MM-DD HH:MM`, `None` if not run yet
    pub created_at: Option<String>,
    pub scheduled_at: Option<String>,
}

pub fn mock_backups() -> Vec<Backup> {
    let backup = |id, name: &str, kind, status, size: &str, created: Option<&str>, scheduled: Option<&str>| Backup {
        id,
        name: name.to_string(),
        kind,
        status,
        size: size.to_string(),
        created_at: created.map(str::to_string),
        scheduled_at: scheduled.map(str::to_string),
    };
    use BackupKind::*;
    use BackupStatus::*;

    vec![
        backup(1, "Full Backup - Daily", Full, Completed, "2.4 GB", Some("2024-03-15 02:00"), None),
        backup(2, "Incremental Backup", Incremental, Completed, "156 MB", Some("2024-03-15 14:00"), None),
        backup(3, "Full Backup - Weekly", Full, InProgress, "—", Some("2024-03-15 18:00"), None),
        backup(4, "Monthly Archive", Full, Scheduled, "—", None, Some("2024-03-31 00:00")),
    ]
}

pub const BACKUP_TABLES: &[&str] = &["Users", "Products", "Content", "Files", "Reports", "Custom Fields"];

/// Форма "Create Backup".
#[derive(Debug, Clone, PartialEq)]
pub struct BackupDraft {
    pub name: String,
    pub kind: BackupKind,
    pub tables: Vec<&'static str>,
}

impl Default for BackupDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: BackupKind::Full,
            tables: BACKUP_TABLES.to_vec(),
        }
    }
}

impl BackupDraft {
    pub fn toggle_table(&mut self, table: &'static str) {
        if let Some(pos) = self.tables.iter().position(|t| *t == table) {
            self.tables.remove(pos);
        } else {
            self.tables.push(table);
        }
    }

    pub fn validate(&self) -> Result<&str, ValidationError> {
        let name = validation::required(&self.name, "a backup name")?;
        if self.tables.is_empty() {
            return Err(ValidationError::invalid("Select at least one table to back up"));
        }
        Ok(name)
    }

    /// Snapshot of the selected in-memory tables.
    pub fn payload(&self, created_at: &str) -> Result<BackupPayload, ValidationError> {
        let name = self.validate()?;
        let has = |table: &str| self.tables.contains(&table);
        Ok(BackupPayload {
            name: name.to_string(),
            kind: self.kind,
            created_at: created_at.to_string(),
            users: if has("Users") { mock_users() } else { Vec::new() },
            products: if has("Products") { mock_products() } else { Vec::new() },
            content: if has("Content") { mock_content() } else { Vec::new() },
            files: if has("Files") { mock_files() } else { Vec::new() },
            reports: if has("Reports") { mock_reports() } else { Vec::new() },
            custom_fields: if has("Custom Fields") { mock_custom_fields() } else { Vec::new() },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub name: String,
    pub kind: BackupKind,
    pub created_at: String,
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub content: Vec<ContentItem>,
    pub files: Vec<FileItem>,
    pub reports: Vec<Report>,
    pub custom_fields: Vec<CustomField>,
}

impl BackupPayload {
    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.products.len()
            + self.content.len()
            + self.files.len()
            + self.reports.len()
            + self.custom_fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_requires_name_then_numeric_target() {
        let mut draft = KpiDraft::default();
        assert_eq!(
            draft.build(6).unwrap_err().to_string(),
            "Please enter a KPI name"
        );

        draft.name = "Trial Conversion".to_string();
        assert_eq!(
            draft.build(6).unwrap_err().to_string(),
            "Please enter a target value"
        );

        draft.target = "lots".to_string();
        assert!(matches!(draft.build(6), Err(ValidationError::Invalid { .. })));

        draft.target = "150000".to_string();
        let kpi = draft.build(6).unwrap();
        assert_eq!(kpi.target, "$150,000");
        assert_eq!(kpi.category, KpiCategory::Revenue);
    }

    #[test]
    fn test_format_target_units() {
        assert_eq!(format_target(40.5, KpiUnit::Currency), "$40.50");
        assert_eq!(format_target(2.0, KpiUnit::Percent), "2%");
        assert_eq!(format_target(1250.0, KpiUnit::Count), "1,250");
    }

    #[test]
    fn test_time_series_is_stable_and_ordered() {
        let first = time_series(DataSource::Users, 30);
        assert_eq!(first, time_series(DataSource::Users, 30));
        assert_eq!(first.len(), 30);
        assert_eq!(first[0].days_ago, 30);
        assert_eq!(first[29].days_ago, 1);
        assert!(first.iter().all(|p| (375..=625).contains(&p.value)));
    }

    #[test]
    fn test_backup_payload_respects_table_selection() {
        let mut draft = BackupDraft {
            name: "Nightly".to_string(),
            ..BackupDraft::default()
        };
        draft.toggle_table("Files");
        let payload = draft.payload("2024-03-16 02:00").unwrap();
        assert!(payload.files.is_empty());
        assert!(!payload.users.is_empty());

        draft.tables.clear();
        assert!(matches!(draft.validate(), Err(ValidationError::Invalid { .. })));
    }

    #[test]
    fn test_backup_payload_serializes_camel_case() {
        let draft = BackupDraft {
            name: "Full".to_string(),
            ..BackupDraft::default()
        };
        let json = serde_json::to_string(&draft.payload("now").unwrap()).unwrap();
        assert!(json.contains("\"customFields\""));
        assert!(json.contains("\"kind\":\"Full Backup\""));
    }
}
