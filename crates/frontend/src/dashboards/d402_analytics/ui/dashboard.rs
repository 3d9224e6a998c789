use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::export_modal::ExportModal;
use crate::shared::date_utils::{now_iso, today_iso};
use crate::shared::export::{build_csv, download_text, export_json, CsvExportable, MIME_CSV, MIME_EXCEL, MIME_TEXT};
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_notifications;
use contracts::dashboards::d402_analytics::{
    analytics_metrics, analytics_report_text, device_breakdown, key_insights, percent_of, revenue_total,
    revenue_trend, top_countries, top_pages, traffic_sources, AnalyticsExport, AnalyticsMetric, Share,
    TimeRange,
};
use contracts::domain::a005_report::ExportFormat;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

impl CsvExportable for AnalyticsMetric {
    fn headers() -> Vec<&'static str> {
        vec!["Metric", "Value", "Change"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.label.clone(), self.value.clone(), self.change.clone()]
    }
}

fn export_analytics(range: TimeRange, format: ExportFormat) -> Result<(), String> {
    let stem = format!("analytics-{}-{}", range, today_iso());
    let export = AnalyticsExport::collect(range, now_iso());
    match format {
        ExportFormat::Csv | ExportFormat::Excel => {
            let rows: Vec<&AnalyticsMetric> = export.metrics.iter().collect();
            let mime = if format == ExportFormat::Csv { MIME_CSV } else { MIME_EXCEL };
            download_text(&build_csv(&rows), &format!("{stem}.csv"), mime)
        }
        ExportFormat::Json => export_json(&export, &format!("{stem}.json")),
        ExportFormat::Pdf => download_text(&analytics_report_text(&export), &format!("{stem}.txt"), MIME_TEXT),
    }
}

/// Полоса распределения с подписью и числом за ней.
fn share_rows(rows: Vec<Share>, unit: &'static str) -> impl IntoView {
    rows.into_iter()
        .map(|s| view! {
            <div class="channel-list__row">
                <div class="channel-list__label">
                    <span>{s.icon.map(|flag| view! { <span class="channel-list__icon">{flag}</span> })}{s.label}</span>
                    <span>
                        <span class="channel-list__count">{format!("{} {}", format_thousands(s.count as i64), unit)}</span>
                        <span class="channel-list__percent">{format!("{}%", s.percent)}</span>
                    </span>
                </div>
                <div class="progress-bar">
                    <div class="progress-bar__fill" style=format!("width: {}%;", s.percent)></div>
                </div>
            </div>
        })
        .collect_view()
}

/// Analytics: KPI за период, выручка, устройства, страницы, источники, гео.
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let toasts = use_notifications();
    let navigate = use_navigate();
    let range = RwSignal::new(TimeRange::default());
    let show_export = RwSignal::new(false);

    let revenue = Memo::new(move |_| revenue_trend(range.get()));

    let on_export = Callback::new(move |format: ExportFormat| {
        let current = range.get_untracked();
        match export_analytics(current, format) {
            Ok(()) => {
                log::info!("analytics ({}) exported as {}", current, format);
                toasts.success(format!("Analytics data exported as {}", format));
                show_export.set(false);
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    });

    view! {
        <PageFrame page_id="d402_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Analytics Dashboard"
                subtitle="Comprehensive insights into your application performance, user behavior, and business metrics."
            >
                <div class="segmented">
                    {TimeRange::ALL.iter().copied().map(|r| view! {
                        <button
                            class="segmented__item"
                            class:segmented__item--active=move || range.get() == r
                            on:click=move |_| range.set(r)
                        >
                            {r.label()}
                        </button>
                    }).collect_view()}
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_export.set(true)>
                    {icon("download")}
                    "Export Data"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/reports", Default::default())
                >
                    {icon("file-text")}
                    "Generate Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="metric-grid">
                    {analytics_metrics().into_iter().map(|m| {
                        let trend_class = if m.improving { "metric-card__change--up" } else { "metric-card__change--down" };
                        let arrow = if m.improving { "\u{2191}" } else { "\u{2193}" };
                        view! {
                            <div class="metric-card">
                                <div class="metric-card__head">
                                    <span class="metric-card__label">{m.label}</span>
                                    <span class="metric-card__icon">{m.icon}</span>
                                </div>
                                <p class="metric-card__value">{m.value}</p>
                                <p class=format!("metric-card__change {trend_class}")>
                                    {format!("{arrow} {} vs last period", m.change)}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="dashboard-grid dashboard-grid--wide-left">
                    <CardAnimated title="Revenue Trend" delay_ms=0>
                        <span class="card__meta">{move || range.get().caption()}</span>
                        <div class="bar-chart bar-chart--labelled">
                            {move || revenue.with(|points| {
                                let max = points.iter().map(|p| p.value).max().unwrap_or(0);
                                points.iter().map(|p| view! {
                                    <div class="bar-chart__column">
                                        <div
                                            class="bar-chart__bar"
                                            style=format!("height: {}%;", percent_of(p.value, max))
                                            title=format!("${}", format_thousands(p.value as i64))
                                        ></div>
                                        <span class="bar-chart__label">{p.label.clone()}</span>
                                    </div>
                                }).collect_view()
                            })}
                        </div>
                        <div class="card__footer">
                            <span>"Total Revenue"</span>
                            <strong>{move || revenue.with(|points| format!("${}", format_thousands(revenue_total(points) as i64)))}</strong>
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Device Breakdown" delay_ms=60>
                        <span class="card__meta">"This month"</span>
                        <div class="channel-list">
                            {share_rows(device_breakdown(), "users")}
                        </div>
                    </CardAnimated>
                </div>

                <div class="dashboard-grid">
                    <CardAnimated title="Page Performance" delay_ms=120>
                        <span class="card__meta">"Last 30 days"</span>
                        <div class="page-list">
                            {
                                let pages = top_pages();
                                let max_views = pages.iter().map(|p| p.views).max().unwrap_or(0);
                                pages.into_iter().map(|p| {
                                    let avg_time = p.avg_time_label();
                                    view! {
                                        <div class="page-list__row">
                                            <div class="page-list__label">
                                                <code>{p.path}</code>
                                                <span>{format!("{} views", format_thousands(p.views as i64))}</span>
                                                <span>{format!("{} unique", format_thousands(p.unique as i64))}</span>
                                                <span class="text-error">{format!("{}% bounce", p.bounce_percent)}</span>
                                            </div>
                                            <div class="page-list__bar">
                                                <div class="progress-bar">
                                                    <div
                                                        class="progress-bar__fill"
                                                        style=format!("width: {}%;", percent_of(p.views, max_views))
                                                    ></div>
                                                </div>
                                                <span class="page-list__time">{avg_time}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()
                            }
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Traffic Sources" delay_ms=180>
                        <div class="channel-list">
                            {share_rows(traffic_sources(), "visits")}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Geographic Distribution" delay_ms=240>
                        <div class="channel-list">
                            {share_rows(top_countries(), "users")}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Key Insights" delay_ms=300>
                        <div class="insight-list">
                            {key_insights().into_iter().map(|i| view! {
                                <div class="insight-list__item">
                                    <div class="insight-list__head">
                                        <span class="insight-list__title">{i.title}</span>
                                        <span class="insight-list__value">{i.value}</span>
                                    </div>
                                    <p class="insight-list__text">{i.description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>
                </div>
            </div>

            <Show when=move || show_export.get()>
                <ExportModal
                    title="Export Analytics Data"
                    description="Choose a format to export the analytics for the selected period:"
                    formats=ExportFormat::ALL
                    on_export=on_export
                    on_close=Callback::new(move |_| show_export.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_csv() {
        let metrics = analytics_metrics();
        let rows: Vec<&AnalyticsMetric> = metrics.iter().collect();
        let csv = build_csv(&rows);
        assert!(csv.starts_with("Metric,Value,Change\n"));
        assert!(csv.contains("Total Revenue,\"$124,580\",+12.5%\n"));
        assert!(csv.contains("Bounce Rate,32.1%,-2.4%\n"));
    }
}
