use super::config::TIMEZONES;
use leptos::prelude::*;

/// Настройки рабочего пространства (в памяти, сбрасываются при перезагрузке).
#[derive(Clone, Copy)]
pub struct AppSettings {
    pub workspace_name: RwSignal<String>,
    pub timezone: RwSignal<String>,
    pub realtime: RwSignal<bool>,
}

impl AppSettings {
    pub fn new() -> Self {
        Self {
            workspace_name: RwSignal::new("Acme Inc.".to_string()),
            timezone: RwSignal::new(TIMEZONES[0].to_string()),
            realtime: RwSignal::new(true),
        }
    }

    pub fn save(&self, workspace_name: String, timezone: String) {
        log::info!("settings saved: workspace={workspace_name}, tz={timezone}");
        self.workspace_name.set(workspace_name);
        self.timezone.set(timezone);
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>().expect("AppSettings not provided")
}
