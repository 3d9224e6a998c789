use super::backup::CreateBackupModal;
use super::kpi_builder::KpiBuilderModal;
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::import_modal::ImportModal;
use crate::shared::config::{DATA_IMPORT_EXTENSIONS, DATA_IMPORT_MAX_BYTES, REALTIME_REFRESH_MS};
use crate::shared::date_utils::{time_of_day, today_iso};
use crate::shared::export::{build_csv, download_text, export_csv, export_json, CsvExportable, MIME_EXCEL};
use crate::shared::file_input::PickedFile;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::settings::use_settings;
use crate::shared::simulation::{simulate_progress, SimulatedProgress};
use crate::shared::toast::use_notifications;
use contracts::dashboards::d401_data_insights::{
    mock_backups, mock_kpis, time_series, Backup, BackupDraft, BackupStatus, DataSource,
    ImportTable, Kpi, SeriesPoint, Trend,
};
use contracts::domain::a004_file::format_size;
use contracts::domain::a005_report::ExportFormat;
use contracts::shared::format::file_stem;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use thaw::*;

const CHART_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Visualization,
    Kpis,
    ImportExport,
    Backup,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Visualization, Tab::Kpis, Tab::ImportExport, Tab::Backup];

    fn label(self) -> &'static str {
        match self {
            Tab::Visualization => "Visualization",
            Tab::Kpis => "Custom KPIs",
            Tab::ImportExport => "Import/Export",
            Tab::Backup => "Backup/Restore",
        }
    }
}

impl CsvExportable for Kpi {
    fn headers() -> Vec<&'static str> {
        vec!["KPI", "Category", "Value", "Change", "Target"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.to_string(),
            self.value.clone(),
            self.change.clone(),
            self.target.clone(),
        ]
    }
}

impl CsvExportable for SeriesPoint {
    fn headers() -> Vec<&'static str> {
        vec!["Days Ago", "Value"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.days_ago.to_string(), self.value.to_string()]
    }
}

fn backup_tone(status: BackupStatus) -> Tone {
    match status {
        BackupStatus::Completed => Tone::Success,
        BackupStatus::InProgress => Tone::Warning,
        BackupStatus::Scheduled => Tone::Info,
        BackupStatus::Failed => Tone::Error,
    }
}

/// Высота столбца в процентах от максимума ряда.
fn bar_height(value: i64, max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    (value.max(0) * 100 / max).clamp(0, 100)
}

/// `YYYY-MM-DD HH:MM` for backup history.
fn timestamp() -> String {
    let time = time_of_day();
    format!("{} {}", today_iso(), time.get(..5).unwrap_or(&time))
}

fn export_kpis(kpis: &[Kpi], format: ExportFormat) -> Result<(), String> {
    let rows: Vec<&Kpi> = kpis.iter().collect();
    let stem = format!("kpis-{}", today_iso());
    match format {
        ExportFormat::Csv => export_csv(&rows, &format!("{stem}.csv")),
        ExportFormat::Excel => download_text(&build_csv(&rows), &format!("{stem}.xls"), MIME_EXCEL),
        ExportFormat::Json => export_json(kpis, &format!("{stem}.json")),
        ExportFormat::Pdf => Err("PDF export is not available for KPIs".to_string()),
    }
}

/// Data & Insights: график, пользовательские KPI, импорт данных и резервные копии.
#[component]
pub fn DataInsightsDashboard() -> impl IntoView {
    let toasts = use_notifications();
    let settings = use_settings();
    let tab = RwSignal::new(Tab::Visualization);

    // Real-time refresh
    let last_update = RwSignal::new(time_of_day());
    let ticker = StoredValue::new_local(None::<Interval>);
    Effect::new(move |_| {
        if settings.realtime.get() {
            let handle = Interval::new(REALTIME_REFRESH_MS, move || {
                let _ = last_update.try_set(time_of_day());
            });
            ticker.set_value(Some(handle));
            log::debug!("real-time refresh every {} ms", REALTIME_REFRESH_MS);
        } else {
            // drop cancels the interval
            ticker.set_value(None);
            log::debug!("real-time refresh paused");
        }
    });
    let toggle_realtime = move |_| settings.realtime.update(|on| *on = !*on);

    // Visualization
    let source = RwSignal::new(DataSource::Revenue.as_str().to_string());
    let series = Memo::new(move |_| {
        let source = DataSource::parse(&source.get()).unwrap_or(DataSource::Revenue);
        time_series(source, CHART_DAYS)
    });
    let export_chart = move |_| {
        let result = series.with_untracked(|points| {
            let rows: Vec<&SeriesPoint> = points.iter().collect();
            export_csv(&rows, &format!("chart-{}-{}.csv", source.get_untracked().to_lowercase(), today_iso()))
        });
        match result {
            Ok(()) => {
                toasts.success("Chart data exported as CSV");
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    };

    // KPIs
    let kpis = RwSignal::new(mock_kpis());
    let show_kpi_builder = RwSignal::new(false);
    let next_kpi_id = move || kpis.with_untracked(|k| k.iter().map(|x| x.id).max().unwrap_or(0) + 1);
    let on_kpi_created = Callback::new(move |kpi: Kpi| {
        let message = format!("KPI \"{}\" created successfully!", kpi.name);
        log::info!("kpi {} created", kpi.id);
        kpis.update(|list| list.push(kpi));
        show_kpi_builder.set(false);
        toasts.success(message);
    });

    // Import / export
    let show_import = RwSignal::new(false);
    let import_table = RwSignal::new(ImportTable::Users.as_str().to_string());
    let on_imported = Callback::new(move |file: PickedFile| {
        let table = import_table.get_untracked();
        log::info!("{} imported into {}", file.name, table);
        show_import.set(false);
        toasts.success(format!("Data imported successfully to {}!", table));
    });
    let on_export_kpis = move |format: ExportFormat| {
        match kpis.with_untracked(|k| export_kpis(k, format)) {
            Ok(()) => {
                toasts.success(format!("KPIs exported as {}", format));
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    };

    // Backups
    let backups = RwSignal::new(mock_backups());
    let show_backup = RwSignal::new(false);
    let backup_progress = RwSignal::new(None::<u32>);
    let on_backup = Callback::new(move |draft: BackupDraft| {
        show_backup.set(false);
        if backup_progress.get_untracked().is_some() {
            toasts.warning("A backup is already running");
            return;
        }
        let id = backups.with_untracked(|b| b.iter().map(|x| x.id).max().unwrap_or(0) + 1);
        let created_at = timestamp();
        backups.update(|list| {
            list.insert(
                0,
                Backup {
                    id,
                    name: draft.name.trim().to_string(),
                    kind: draft.kind,
                    status: BackupStatus::InProgress,
                    size: "—".to_string(),
                    created_at: Some(created_at.clone()),
                    scheduled_at: None,
                },
            )
        });
        toasts.info(format!("Creating backup \"{}\"...", draft.name.trim()));

        simulate_progress("backup", backup_progress, move || {
            let outcome = draft.payload(&created_at).map_err(|e| e.to_string()).and_then(|payload| {
                let size = serde_json::to_string(&payload).map(|s| s.len()).unwrap_or(0);
                let filename = format!("backup-{}-{}.json", file_stem(&payload.name), today_iso());
                export_json(&payload, &filename).map(|()| (payload.record_count(), size))
            });
            let (status, size) = match &outcome {
                Ok((_, size)) => (BackupStatus::Completed, format_size(*size as f64)),
                Err(_) => (BackupStatus::Failed, "—".to_string()),
            };
            backups.update(|list| {
                if let Some(b) = list.iter_mut().find(|b| b.id == id) {
                    b.status = status;
                    b.size = size;
                }
            });
            match outcome {
                Ok((records, _)) => {
                    toasts.success(format!("Backup \"{}\" created ({} records)", draft.name.trim(), records));
                }
                Err(e) => {
                    log::warn!("backup {} failed: {}", id, e);
                    toasts.error(format!("Backup failed: {}", e));
                }
            }
        });
    });

    view! {
        <PageFrame page_id="d401_data_insights--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Data & Insights"
                subtitle="Data visualization, custom KPIs, import/export and backups."
            >
                <div class="live-indicator">
                    <span
                        class="live-indicator__dot"
                        class:live-indicator__dot--active=move || settings.realtime.get()
                    ></span>
                    <span>{move || if settings.realtime.get() { "Live" } else { "Paused" }}</span>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=toggle_realtime>
                        {move || if settings.realtime.get() { "Pause" } else { "Resume" }}
                    </Button>
                </div>
                <span class="page__meta">{move || format!("Updated: {}", last_update.get())}</span>
            </PageHeader>

            <div class="tabs-bar">
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        class="tabs-bar__item"
                        class:tabs-bar__item--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                {move || match tab.get() {
                    Tab::Visualization => view! {
                        <CardAnimated>
                            <div class="chart-toolbar">
                                <Select value=source>
                                    {DataSource::ALL
                                        .iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                        .collect_view()}
                                </Select>
                                <Button appearance=ButtonAppearance::Secondary on_click=export_chart>
                                    {icon("download")}
                                    "Export Chart"
                                </Button>
                            </div>
                            <div class="bar-chart">
                                {move || series.with(|points| {
                                    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
                                    points.iter().map(|p| {
                                        let title = format!("{} day(s) ago: {}", p.days_ago, p.value);
                                        view! {
                                            <div
                                                class="bar-chart__bar"
                                                style=format!("height: {}%;", bar_height(p.value, max))
                                                title=title
                                            ></div>
                                        }
                                    }).collect_view()
                                })}
                            </div>
                            <p class="form__hint">{format!("Last {} days", CHART_DAYS)}</p>
                        </CardAnimated>
                    }.into_any(),

                    Tab::Kpis => view! {
                        <div class="section-toolbar">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| show_kpi_builder.set(true)>
                                {icon("plus")}
                                "Create KPI"
                            </Button>
                        </div>
                        <div class="kpi-grid">
                            <For
                                each=move || kpis.get()
                                key=|k: &Kpi| k.id
                                children=move |k: Kpi| {
                                    let change_class = match k.trend {
                                        Trend::Up => "kpi-card__change kpi-card__change--up",
                                        Trend::Down => "kpi-card__change kpi-card__change--down",
                                    };
                                    view! {
                                        <div class="kpi-card">
                                            <div class="kpi-card__header">
                                                <span class="kpi-card__name">{k.name.clone()}</span>
                                                <ToneBadge tone=Tone::Neutral text=k.category.as_str() />
                                            </div>
                                            <div class="kpi-card__value">{k.value.clone()}</div>
                                            <div class="kpi-card__footer">
                                                <span class=change_class>{k.change.clone()}</span>
                                                <span class="kpi-card__target">{format!("Target: {}", k.target)}</span>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any(),

                    Tab::ImportExport => view! {
                        <div class="dashboard-grid">
                            <CardAnimated title="Import Data">
                                <p class="modal-text">"Upload CSV, Excel, or JSON files to import data into your system."</p>
                                <button class="drop-zone drop-zone--button" on:click=move |_| show_import.set(true)>
                                    {icon("upload")}
                                    <p class="drop-zone__text">"Click to upload or drag and drop"</p>
                                    <p class="drop-zone__hint">"CSV, XLSX, JSON (Max 10MB)"</p>
                                </button>
                            </CardAnimated>
                            <CardAnimated title="Export Data" delay_ms=60>
                                <p class="modal-text">"Export your custom KPIs for analysis or backup."</p>
                                <div class="export-options">
                                    {[ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Json]
                                        .into_iter()
                                        .map(|format| view! {
                                            <button class="export-option" on:click=move |_| on_export_kpis(format)>
                                                {icon("download")}
                                                <span>{format!("Export as {}", format)}</span>
                                            </button>
                                        })
                                        .collect_view()}
                                </div>
                            </CardAnimated>
                        </div>
                    }.into_any(),

                    Tab::Backup => view! {
                        <div class="section-toolbar">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || backup_progress.get().is_some())
                                on_click=move |_| show_backup.set(true)
                            >
                                {icon("database")}
                                "Create Backup"
                            </Button>
                        </div>
                        <SimulatedProgress label="Creating backup" progress=backup_progress />
                        <CardAnimated title="Backup History">
                            <div class="mini-list">
                                <For
                                    each=move || backups.get()
                                    key=|b: &Backup| (b.id, b.status, b.size.clone())
                                    children=move |b: Backup| view! {
                                        <div class="mini-list__row">
                                            <div class="mini-list__body">
                                                <p class="mini-list__title">{b.name.clone()}</p>
                                                <p class="mini-list__text">
                                                    {b.kind.as_str()}
                                                    " • "
                                                    {b.size.clone()}
                                                    " • "
                                                    {b.created_at.clone().unwrap_or_else(|| "—".to_string())}
                                                    {b.scheduled_at.clone().map(|at| format!(" • Scheduled: {}", at))}
                                                </p>
                                            </div>
                                            <ToneBadge tone=backup_tone(b.status) text=b.status.as_str() />
                                        </div>
                                    }
                                />
                            </div>
                        </CardAnimated>
                    }.into_any(),
                }}
            </div>

            <Show when=move || show_kpi_builder.get()>
                <KpiBuilderModal
                    next_id=next_kpi_id()
                    on_close=Callback::new(move |_| show_kpi_builder.set(false))
                    on_create=on_kpi_created
                />
            </Show>

            <Show when=move || show_import.get()>
                <ImportModal
                    title="Import Data"
                    hint="CSV, XLSX, JSON (Max 10MB)"
                    accept=".csv,.xlsx,.json"
                    allowed_extensions=DATA_IMPORT_EXTENSIONS
                    max_bytes=DATA_IMPORT_MAX_BYTES
                    missing_message="Please select a file to import"
                    progress_label="data import"
                    on_close=Callback::new(move |_| show_import.set(false))
                    on_imported=on_imported
                >
                    <div class="form__group">
                        <Label>"Import into"</Label>
                        <Select value=import_table>
                            {ImportTable::ALL
                                .iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                </ImportModal>
            </Show>

            <Show when=move || show_backup.get()>
                <CreateBackupModal
                    on_close=Callback::new(move |_| show_backup.set(false))
                    on_create=on_backup
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_to_max() {
        assert_eq!(bar_height(50, 200), 25);
        assert_eq!(bar_height(200, 200), 100);
        assert_eq!(bar_height(-5, 200), 0);
        assert_eq!(bar_height(10, 0), 0);
    }

    #[test]
    fn test_kpi_csv_row() {
        let kpis = mock_kpis();
        let csv = build_csv(&[&kpis[2]]);
        assert_eq!(csv, "KPI,Category,Value,Change,Target\nChurn Rate,Retention,2.4%,-0.5%,2%\n");
    }
}
