use crate::shared::date_utils::time_of_day;
use crate::shared::settings::use_settings;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SyncStatus {
    Live,
    Paused,
}

impl SyncStatus {
    fn display_text(&self) -> &'static str {
        match self {
            SyncStatus::Live => "Real-time updates: on",
            SyncStatus::Paused => "Real-time updates: paused",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            SyncStatus::Live => "status-online",
            SyncStatus::Paused => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_settings();
    let loaded_at = time_of_day();

    let status = move || {
        if settings.realtime.get() {
            SyncStatus::Live
        } else {
            SyncStatus::Paused
        }
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status().css_class()>
                {move || status().display_text()}
            </span>
            <span class="status-bar__item">
                {move || format!("{} · {}", settings.workspace_name.get(), settings.timezone.get())}
            </span>
            <span class="status-bar__item">"Loaded at " {loaded_at}</span>
        </footer>
    }
}
