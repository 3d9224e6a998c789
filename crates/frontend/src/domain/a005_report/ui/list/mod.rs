pub mod state;

use self::state::create_state;
use super::builder::ReportBuilderModal;
use super::schedule::ScheduleReportModal;
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::export::{download_text, MIME_TEXT};
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a005_report::mock::mock_reports;
use contracts::domain::a005_report::{
    Report, ReportFilter, ReportSortKey, ReportStatus, ReportType, ScheduleRequest,
};
use contracts::shared::format::file_stem;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Сколько "генерируется" новый отчёт, мс.
const GENERATION_MS: u32 = 3000;

fn status_tone(status: ReportStatus) -> Tone {
    match status {
        ReportStatus::Generated => Tone::Success,
        ReportStatus::Generating => Tone::Info,
        ReportStatus::Scheduled => Tone::Warning,
        ReportStatus::Failed => Tone::Error,
    }
}

fn download_report(report: &Report) -> Result<(), String> {
    download_text(
        &report.to_text_document(),
        &format!("{}.txt", file_stem(&report.name)),
        MIME_TEXT,
    )
}

/// Marks a generating report as ready, unless the page is gone.
fn finish_generation(reports: RwSignal<Vec<Report>>, id: u32) {
    spawn_local(async move {
        TimeoutFuture::new(GENERATION_MS).await;
        let updated = reports.try_update(|list| {
            if let Some(r) = list.iter_mut().find(|r| r.id == id) {
                r.status = ReportStatus::Generated;
                r.size = "1.1 MB".to_string();
            }
        });
        if updated.is_none() {
            log::debug!("report {id}: page closed before generation finished");
        }
    });
}

#[component]
pub fn ReportList() -> impl IntoView {
    let toasts = use_notifications();
    let reports = RwSignal::new(mock_reports());
    let state = create_state();
    let list = use_list_view(reports.into(), state);

    let show_builder = RwSignal::new(false);
    let show_schedule = RwSignal::new(false);

    let next_id = move || reports.with_untracked(|r| r.iter().map(|x| x.id).max().unwrap_or(0) + 1);

    let on_create = Callback::new(move |report: Report| {
        toasts.info(format!(
            "Creating {} report of type {}...",
            report.name, report.report_type
        ));
        let id = report.id;
        reports.update(|list| list.push(report));
        show_builder.set(false);
        finish_generation(reports, id);
    });

    let on_schedule = Callback::new(move |request: ScheduleRequest| {
        log::info!("scheduled {} report, {}", request.report_type, request.frequency);
        show_schedule.set(false);
        toasts.success("Report scheduled successfully!");
    });

    let on_open = move |report: &Report| {
        toasts.info(format!("Opening report: {}", report.name));
    };

    let on_download = move |report: &Report| match download_report(report) {
        Ok(()) => {
            toasts.info(format!("Downloading report: {} ({})", report.name, report.size));
        }
        Err(e) => {
            toasts.error(e);
        }
    };

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a005_report--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Reports"
                subtitle="Generate, view, and download comprehensive reports. Schedule automated reports for regular delivery."
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_schedule.set(true)>
                    {icon("calendar")}
                    "Schedule Report"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_builder.set(true)>
                    {icon("plus")}
                    "New Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Reports"
                        icon_name="file-text"
                        value=Signal::derive(move || reports.with(|r| r.len().to_string()))
                        subtitle=Signal::derive(move || {
                            reports.with(|r| Some(format!("{} ready", r.iter().filter(|x| x.is_downloadable()).count())))
                        })
                    />
                    <StatCard
                        label="This Month"
                        icon_name="calendar"
                        value=Signal::derive(move || {
                            reports.with(|r| r.iter().filter(|x| x.is_recent()).count().to_string())
                        })
                        change_percent=15.0
                    />
                    <StatCard
                        label="Scheduled"
                        icon_name="refresh"
                        value=Signal::derive(move || reports.with(|r| r.iter().filter(|x| x.scheduled).count().to_string()))
                        subtitle="Active schedules".to_string()
                    />
                    <StatCard
                        label="Storage Used"
                        icon_name="database"
                        value=Signal::derive(|| "2.4 GB".to_string())
                        subtitle="of 10 GB limit".to_string()
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <span class="filter-panel__title">"Recent Reports"</span>
                        <span class="filter-panel__badge">
                            {move || format!("{} reports", list.filtered.with(Vec::len))}
                        </span>
                    </div>
                    <div class="filter-panel-content">
                        <SearchInput value=search on_change=search_callback(state) placeholder="Search reports..." />
                        <FilterSelect
                            label="Types"
                            options=ReportType::ALL.iter().map(|t| t.as_str()).collect()
                            value=filter_signal(state, ReportFilter::Type)
                            on_change=filter_callback(state, ReportFilter::Type)
                        />
                        <FilterSelect
                            label="Status"
                            options=ReportStatus::ALL.iter().map(|s| s.as_str()).collect()
                            value=filter_signal(state, ReportFilter::Status)
                            on_change=filter_callback(state, ReportFilter::Status)
                        />
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No reports found" on_reset=reset_callback(state) />
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Report" sort_key=ReportSortKey::Name current=sort on_sort=on_sort min_width=240.0 />
                                    <SortableHeaderCell label="Type" sort_key=ReportSortKey::Type current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=110.0>"Period"</TableHeaderCell>
                                    <SortableHeaderCell label="Status" sort_key=ReportSortKey::Status current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Created" sort_key=ReportSortKey::CreatedAt current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=80.0>"Size"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.page.get().items
                                    key=|r: &Report| (r.id, r.status)
                                    children=move |report: Report| {
                                        let ready = report.is_downloadable();
                                        let name = report.name.clone();
                                        let report = StoredValue::new(report);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div>
                                                            <strong><Highlighted text=name search=search /></strong>
                                                            {report.with_value(|r| r.next_run.clone()).map(|next| view! {
                                                                <div class="table__subtext">{format!("Next run: {next}")}</div>
                                                            })}
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{report.with_value(|r| r.report_type.as_str())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{report.with_value(|r| r.period.clone())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <ToneBadge
                                                            tone=report.with_value(|r| status_tone(r.status))
                                                            text=report.with_value(|r| r.status.as_str())
                                                        />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{report.with_value(Report::created_label)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{report.with_value(|r| r.size.clone())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            disabled=!ready
                                                            on_click=move |_| report.with_value(on_open)
                                                        >
                                                            {icon("eye")}
                                                            "Open"
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            disabled=!ready
                                                            on_click=move |_| report.with_value(on_download)
                                                        >
                                                            {icon("download")}
                                                            "Download"
                                                        </Button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || list.page.with(|p| p.page))
                        total_pages=Signal::derive(move || list.page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || list.page.with(|p| p.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </Show>
            </div>

            <Show when=move || show_builder.get()>
                <ReportBuilderModal
                    next_id=next_id()
                    on_close=Callback::new(move |_| show_builder.set(false))
                    on_create=on_create
                />
            </Show>

            <Show when=move || show_schedule.get()>
                <ScheduleReportModal
                    on_close=Callback::new(move |_| show_schedule.set(false))
                    on_schedule=on_schedule
                />
            </Show>
        </PageFrame>
    }
}
