use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::config::TIMEZONES;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::settings::use_settings;
use crate::shared::toast::use_notifications;
use contracts::shared::validation;
use leptos::prelude::*;
use thaw::*;

const PUBLIC_CLIENT_KEY: &str = "pk_live_4eC39HqLyjWDarjtT1zdp7dc";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = use_settings();
    let toasts = use_notifications();

    let workspace_name = RwSignal::new(settings.workspace_name.get_untracked());
    let timezone = RwSignal::new(settings.timezone.get_untracked());

    let save = move |_| {
        let tz = timezone.get_untracked();
        match validation::required(&workspace_name.get_untracked(), "a workspace name") {
            Ok(name) => {
                let name = name.to_string();
                settings.save(name.clone(), tz.clone());
                toasts.success(format!("Settings saved: {} ({})", name, tz));
            }
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    let copy_key = move |_| {
        copy_to_clipboard(PUBLIC_CLIENT_KEY, move |result| match result {
            Ok(()) => {
                toasts.success("Public key copied to clipboard");
            }
            Err(e) => {
                toasts.error(e);
            }
        });
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Settings"
                subtitle="Configure your workspace, API keys, and environment-specific settings."
            />

            <div class="page__content settings-grid">
                <CardAnimated title="Workspace">
                    <p class="card__meta">"Basic metadata shared between web and mobile clients."</p>
                    <div class="form__group">
                        <Label>"Workspace name *"</Label>
                        <Input value=workspace_name placeholder="Acme Inc. Admin" />
                    </div>
                    <div class="form__group">
                        <Label>"Default timezone *"</Label>
                        <Select value=timezone>
                            {TIMEZONES
                                .iter()
                                .map(|tz| view! { <option value=*tz>{*tz}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <Checkbox checked=settings.realtime label="Real-time data refresh" />
                        <p class="form__hint">"Dashboards refresh every 5 seconds while enabled."</p>
                    </div>
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=save>
                            "Save Workspace Settings"
                        </Button>
                    </div>
                </CardAnimated>

                <CardAnimated title="API access" delay_ms=60>
                    <p class="card__meta">
                        "Keep secrets on the server. Clients only use short-lived tokens."
                    </p>
                    <div class="key-row">
                        <div>
                            <p class="key-row__label">"Public client key"</p>
                            <code class="key-row__value">{PUBLIC_CLIENT_KEY}</code>
                        </div>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=copy_key>
                            {icon("copy")}
                            "Copy"
                        </Button>
                    </div>
                    <p class="form__hint">"Secret keys are managed on the Account page."</p>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
