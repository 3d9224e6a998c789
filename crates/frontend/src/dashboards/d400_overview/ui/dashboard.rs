use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::export_modal::ExportModal;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{now_iso, today_iso};
use crate::shared::export::{build_csv, download_text, export_json, CsvExportable, MIME_CSV, MIME_EXCEL, MIME_TEXT};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_notifications;
use contracts::dashboards::d400_overview::{
    overview_metrics, overview_report_text, recent_users, top_products, traffic_by_channel,
    OverviewExport, OverviewMetric,
};
use contracts::domain::a001_user::mock::mock_users;
use contracts::domain::a002_product::mock::mock_products;
use contracts::domain::a005_report::ExportFormat;
use contracts::shared::format::initials;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

impl CsvExportable for OverviewMetric {
    fn headers() -> Vec<&'static str> {
        vec!["Metric", "Value", "Change"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.value.clone(),
            self.change.clone().unwrap_or_else(|| self.compared_to.clone()),
        ]
    }
}

// (path, label, icon)
const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("/users", "New User", "user"),
    ("/products", "Add Product", "package"),
    ("/reports", "Generate Report", "file-text"),
    ("/analytics", "View Analytics", "trending-up"),
];

fn export_overview(format: ExportFormat) -> Result<(), String> {
    let metrics = overview_metrics();
    let stem = format!("dashboard-export-{}", today_iso());
    match format {
        ExportFormat::Csv => {
            let rows: Vec<&OverviewMetric> = metrics.iter().collect();
            download_text(&build_csv(&rows), &format!("{stem}.csv"), MIME_CSV)
        }
        ExportFormat::Excel => {
            let rows: Vec<&OverviewMetric> = metrics.iter().collect();
            download_text(&build_csv(&rows), &format!("{stem}.csv"), MIME_EXCEL)
        }
        ExportFormat::Json => {
            let export = OverviewExport {
                metrics,
                traffic: traffic_by_channel(),
                exported_at: now_iso(),
            };
            export_json(&export, &format!("{stem}.json"))
        }
        ExportFormat::Pdf => {
            download_text(&overview_report_text(&metrics), &format!("{stem}.txt"), MIME_TEXT)
        }
    }
}

/// Overview: KPI, быстрые действия, трафик, активность за сегодня.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let navigate = use_navigate();
    let show_export = RwSignal::new(false);

    let users = mock_users();
    let products = mock_products();

    let todays_activity = Signal::derive(move || {
        ctx.feed.with(|items| {
            items
                .iter()
                .filter(|n| n.is_today())
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let on_export = Callback::new(move |format: ExportFormat| match export_overview(format) {
        Ok(()) => {
            log::info!("dashboard exported as {}", format);
            toasts.success(format!("Dashboard data exported as {}", format));
            show_export.set(false);
        }
        Err(e) => {
            toasts.error(e);
        }
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Overview"
                subtitle="High-level snapshot of your product, users, and revenue."
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate("/reports", Default::default())
                >
                    {icon("file-text")}
                    "New Report"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_export.set(true)>
                    {icon("download")}
                    "Export"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {overview_metrics().into_iter().map(|m| {
                        let icon_name = match m.label.as_str() {
                            "Active Users" => "users",
                            "Monthly Recurring" => "credit-card",
                            "Error Rate" => "activity",
                            _ => "refresh",
                        };
                        let subtitle = match &m.change {
                            Some(change) => format!("{} {}", change, m.compared_to),
                            None => m.compared_to.clone(),
                        };
                        view! {
                            <StatCard
                                label=m.label
                                icon_name=icon_name
                                value=Signal::stored(m.value)
                                change_percent=m.change_percent
                                subtitle=subtitle
                            />
                        }
                    }).collect_view()}
                </div>

                <div class="quick-actions">
                    {QUICK_ACTIONS.iter().map(|&(path, label, icon_name)| view! {
                        <A href=path attr:class="quick-action">
                            <div class="quick-action__icon">{icon(icon_name)}</div>
                            <div>
                                <p class="quick-action__label">{label}</p>
                                <p class="quick-action__hint">"Quick action"</p>
                            </div>
                        </A>
                    }).collect_view()}
                </div>

                <div class="dashboard-grid">
                    <CardAnimated title="Traffic by Channel" delay_ms=0>
                        <span class="card__meta">"Last 7 days"</span>
                        <div class="channel-list">
                            {traffic_by_channel().into_iter().map(|c| view! {
                                <div class="channel-list__row">
                                    <div class="channel-list__label">
                                        <span>{c.channel}</span>
                                        <span>{format!("{}%", c.percent)}</span>
                                    </div>
                                    <div class="progress-bar">
                                        <div
                                            class="progress-bar__fill"
                                            style=format!("width: {}%;", c.percent)
                                        ></div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Today's Activity" delay_ms=60>
                        <A href="/notifications" attr:class="card__link">"View all"</A>
                        <ul class="activity-list">
                            <For
                                each=move || todays_activity.get()
                                key=|n| n.id
                                children=move |n| view! {
                                    <li class="activity-list__item">
                                        <span class=format!("activity-list__dot activity-list__dot--{}", n.kind.as_str())></span>
                                        <div class="activity-list__body">
                                            <p class="activity-list__title">{n.title.clone()}</p>
                                            <p class="activity-list__text">{n.message.clone()}</p>
                                        </div>
                                        <span class="activity-list__time">{n.received_label()}</span>
                                    </li>
                                }
                            />
                        </ul>
                        <Show when=move || todays_activity.with(Vec::is_empty)>
                            <p class="card__empty">"No activity today"</p>
                        </Show>
                    </CardAnimated>

                    <CardAnimated title="Recent Users" delay_ms=120>
                        <A href="/users" attr:class="card__link">"View all"</A>
                        <div class="mini-list">
                            {recent_users(&users, 3).into_iter().map(|u| view! {
                                <div class="mini-list__row">
                                    <div class="avatar">{initials(&u.name)}</div>
                                    <div class="mini-list__body">
                                        <p class="mini-list__title">{u.name.clone()}</p>
                                        <p class="mini-list__text">{u.role.as_str()}</p>
                                    </div>
                                    <span class="mini-list__meta">{u.last_seen_label()}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Top Products" delay_ms=180>
                        <A href="/products" attr:class="card__link">"View all"</A>
                        <div class="mini-list">
                            {top_products(&products, 3).into_iter().map(|p| view! {
                                <div class="mini-list__row">
                                    <div class="mini-list__body">
                                        <p class="mini-list__title">{p.name.clone()}</p>
                                        <p class="mini-list__text">{format!("{} users", p.users)}</p>
                                    </div>
                                    <span class="mini-list__meta">{p.revenue.clone()}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>
                </div>
            </div>

            <Show when=move || show_export.get()>
                <ExportModal
                    title="Export Dashboard Data"
                    description="Choose a format to export your dashboard data:"
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
    fn test_metric_csv_uses_comparison_when_stable() {
        let metrics = overview_metrics();
        let rows: Vec<&OverviewMetric> = metrics.iter().collect();
        let csv = build_csv(&rows);
        assert!(csv.starts_with("Metric,Value,Change\n"));
        assert!(csv.contains("Error Rate,0.47%,Stable\n"));
        assert!(csv.contains("Active Users,\"2,451\",+18.3%\n"));
    }
}
