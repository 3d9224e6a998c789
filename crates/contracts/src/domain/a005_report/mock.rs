use super::aggregate::{ExportFormat, Report, ReportStatus, ReportType};

const HOUR: u32 = 60;
const DAY: u32 = 24 * HOUR;

fn report(
    id: u32,
    name: &str,
    report_type: ReportType,
    period: &str,
    status: ReportStatus,
    created_minutes_ago: u32,
    size: &str,
    format: Option<ExportFormat>,
) -> Report {
    Report {
        id,
        name: name.to_string(),
        report_type,
        period: period.to_string(),
        status,
        created_minutes_ago,
        size: size.to_string(),
        format,
        scheduled: false,
        next_run: None,
    }
}

pub fn mock_reports() -> Vec<Report> {
    use ExportFormat::*;
    use ReportStatus::*;
    use ReportType::*;

    let mut weekly = report(5, "Weekly Analytics Dashboard", Analytics, "Last 7 days", Scheduled, 7 * DAY, "—", None);
    weekly.scheduled = true;
    weekly.next_run = Some("In 2 days".to_string());

    vec![
        report(1, "Monthly Revenue Report", Revenue, "Last 30 days", Generated, 2 * HOUR, "2.4 MB", Some(Pdf)),
        report(2, "User Activity Summary", Users, "Last 7 days", Generating, 15, "—", None),
        report(3, "Product Performance Analysis", Products, "Last quarter", Generated, DAY, "5.1 MB", Some(Excel)),
        report(4, "System Health Check", System, "Last 24 hours", Generated, 3 * DAY, "892 KB", Some(Pdf)),
        weekly,
        report(6, "Custom Business Report", Custom, "Last month", Generated, 5 * DAY, "3.2 MB", Some(Pdf)),
    ]
}
