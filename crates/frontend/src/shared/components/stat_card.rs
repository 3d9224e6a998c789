use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя: подпись, значение, необязательная динамика.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// Change relative to the previous period, percent
    #[prop(optional, into)]
    change_percent: MaybeProp<f64>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let change_view = move || change_percent.get().map(|pct| {
        let (arrow, cls) = if pct > 0.0 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < 0.0 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
