use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::date_utils::{now_iso, today_iso};
use crate::shared::export::export_json;
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_notifications;
use contracts::dashboards::d402_analytics::{percent_of, TimeRange};
use contracts::dashboards::d403_advanced_analytics::{
    cohorts, conversion_funnel, insights, metric_series, parse_day, predictions, retention_curve,
    AdvancedAnalyticsExport, ChartStyle, Cohort, FocusMetric, Impact, SeriesValue, KEY_INSIGHTS_SHOWN, TICK_EVERY,
};
use leptos::prelude::*;
use thaw::*;

fn impact_tone(impact: Impact) -> Tone {
    match impact {
        Impact::High => Tone::Success,
        Impact::Medium => Tone::Warning,
        Impact::Low => Tone::Neutral,
    }
}

/// Series up to today by the browser clock; empty if the clock string is unreadable.
fn current_series(metric: FocusMetric, range: TimeRange) -> Vec<SeriesValue> {
    let today = today_iso();
    match parse_day(&today) {
        Some(day) => metric_series(metric, range, day),
        None => {
            log::warn!("unexpected date from browser clock: {today}");
            Vec::new()
        }
    }
}

fn chart_class(style: ChartStyle) -> &'static str {
    match style {
        ChartStyle::Line => "bar-chart bar-chart--line",
        ChartStyle::Bar => "bar-chart",
        ChartStyle::Area => "bar-chart bar-chart--area",
    }
}

/// Advanced analytics: выбор метрики, график, воронка, удержание, когорты, прогнозы.
#[component]
pub fn AdvancedAnalyticsDashboard() -> impl IntoView {
    let toasts = use_notifications();
    let metric = RwSignal::new(FocusMetric::Revenue);
    let style = RwSignal::new(ChartStyle::Line);
    let range = RwSignal::new(TimeRange::default());

    let series = Memo::new(move |_| current_series(metric.get(), range.get()));

    let on_export = move |_| {
        let export = AdvancedAnalyticsExport {
            metric: metric.get_untracked(),
            range: range.get_untracked(),
            series: series.get_untracked(),
            funnel: conversion_funnel(),
            retention: retention_curve(),
            cohorts: cohorts(),
            insights: insights(),
            exported_at: now_iso(),
        };
        let filename = format!("advanced-analytics-{}-{}.json", export.metric, today_iso());
        match export_json(&export, &filename) {
            Ok(()) => {
                log::info!("advanced analytics exported: {} over {}", export.metric, export.range);
                toasts.success("Analytics exported as JSON");
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    };

    view! {
        <PageFrame page_id="d403_advanced_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Analytics"
                subtitle="Deep insights, cohort analysis, funnel tracking, and predictive analytics for data-driven decisions."
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
                <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                    {icon("download")}
                    "Export"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="metric-grid metric-grid--four">
                    {FocusMetric::ALL.iter().copied().map(|m| {
                        let headline = m.headline();
                        let change_class = if headline.improving { "metric-card__change--up" } else { "metric-card__change--down" };
                        view! {
                            <button
                                class="metric-card metric-card--selectable"
                                class:metric-card--active=move || metric.get() == m
                                on:click=move |_| metric.set(m)
                            >
                                <span class="metric-card__label">{m.label()}</span>
                                <p class="metric-card__value">{headline.value}</p>
                                <p class=format!("metric-card__change {change_class}")>
                                    {format!("{} vs last period", headline.change)}
                                </p>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="dashboard-grid dashboard-grid--wide-left">
                    <CardAnimated delay_ms=0>
                        <div class="chart-toolbar">
                            <h3 class="card__title">{move || metric.get().chart_title()}</h3>
                            <div class="segmented segmented--small">
                                {ChartStyle::ALL.iter().copied().map(|s| view! {
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || style.get() == s
                                        on:click=move |_| style.set(s)
                                    >
                                        {s.as_str()}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class=move || chart_class(style.get())>
                            {move || series.with(|points| {
                                let max = points.iter().map(|p| p.value).max().unwrap_or(0);
                                points.iter().enumerate().map(|(idx, p)| view! {
                                    <div class="bar-chart__column">
                                        <div
                                            class="bar-chart__bar"
                                            style=format!("height: {}%;", percent_of(p.value, max))
                                            title=format!("{}: {}", p.label(), format_thousands(p.value as i64))
                                        ></div>
                                        {(idx % TICK_EVERY == 0).then(|| view! {
                                            <span class="bar-chart__label">{p.label()}</span>
                                        })}
                                    </div>
                                }).collect_view()
                            })}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="Key Insights" delay_ms=60>
                        <div class="insight-list">
                            {insights().into_iter().take(KEY_INSIGHTS_SHOWN).map(|i| view! {
                                <div class="insight-list__item">
                                    <div class="insight-list__head">
                                        <span class="insight-list__title">{i.title}</span>
                                        <ToneBadge tone=impact_tone(i.impact) text=i.impact.as_str() />
                                    </div>
                                    <p class="insight-list__text">{i.description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>
                </div>

                <div class="dashboard-grid">
                    <CardAnimated title="Conversion Funnel" delay_ms=120>
                        <div class="channel-list">
                            {
                                let funnel = conversion_funnel();
                                let last = funnel.len().saturating_sub(1);
                                funnel.into_iter().enumerate().map(|(idx, stage)| view! {
                                    <div class="channel-list__row">
                                        <div class="channel-list__label">
                                            <span>{stage.stage}</span>
                                            <span>
                                                <span class="channel-list__count">{format_thousands(stage.count as i64)}</span>
                                                <span class="channel-list__percent">{format!("{}%", stage.percent)}</span>
                                            </span>
                                        </div>
                                        <div class="progress-bar">
                                            <div class="progress-bar__fill" style=format!("width: {}%;", stage.percent)></div>
                                        </div>
                                        {(idx < last).then(|| view! { <div class="funnel__step">"\u{2193}"</div> })}
                                    </div>
                                }).collect_view()
                            }
                        </div>
                    </CardAnimated>

                    <CardAnimated title="User Retention" delay_ms=180>
                        <div class="retention-list">
                            {retention_curve().into_iter().map(|r| view! {
                                <div class="retention-list__row">
                                    <span class="retention-list__period">{r.period}</span>
                                    <div class="progress-bar progress-bar--success">
                                        <div class="progress-bar__fill" style=format!("width: {}%;", r.percent)></div>
                                    </div>
                                    <span class="retention-list__value">{format!("{}%", r.percent)}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>
                </div>

                <CardAnimated title="Cohort Analysis" delay_ms=240>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Cohort"</TableHeaderCell>
                                    {(1..=4).map(|w| view! {
                                        <TableHeaderCell>{format!("Week {w}")}</TableHeaderCell>
                                    }).collect_view()}
                                    <TableHeaderCell>"Retained"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {cohorts().into_iter().map(|c| {
                                    let retained = format!("{}%", c.retained_percent());
                                    let Cohort { cohort, weeks } = c;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{cohort}</TableCellLayout></TableCell>
                                            {weeks.into_iter().map(|n| view! {
                                                <TableCell class="text-center">{n}</TableCell>
                                            }).collect_view()}
                                            <TableCell class="text-center">{retained}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </CardAnimated>

                <div class="dashboard-grid">
                    <CardAnimated title="Predictive Insights" delay_ms=300>
                        <div class="insight-list">
                            {predictions().into_iter().map(|p| view! {
                                <div class="insight-list__item insight-list__item--split">
                                    <div>
                                        <p class="insight-list__title">{p.prediction}</p>
                                        <p class="insight-list__text">{p.period}</p>
                                    </div>
                                    <div class="text-right">
                                        <p class="insight-list__value">{p.value}</p>
                                        <p class="insight-list__text">{format!("{}% confidence", p.confidence_percent)}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="All Insights & Recommendations" delay_ms=360>
                        <div class="insight-list insight-list--scroll">
                            {insights().into_iter().map(|i| view! {
                                <div class="insight-list__item">
                                    <p class="insight-list__title">{i.title}</p>
                                    <p class="insight-list__text">{i.description}</p>
                                    <p class="insight-list__action">{i.recommendation}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </CardAnimated>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_class_per_style() {
        assert_eq!(chart_class(ChartStyle::Bar), "bar-chart");
        assert!(chart_class(ChartStyle::Area).ends_with("bar-chart--area"));
    }

    #[test]
    fn test_impact_tone() {
        assert_eq!(impact_tone(Impact::High), Tone::Success);
        assert_eq!(impact_tone(Impact::Low), Tone::Neutral);
    }
}
