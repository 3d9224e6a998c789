use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

const EMAIL_TOPICS: &[&str] = &["System alerts", "User activities", "Security events", "Billing updates"];
const PUSH_MODES: &[&str] = &["High priority only", "All notifications", "Disabled"];

/// Notification delivery preferences. Nothing is persisted.
#[component]
pub fn NotificationSettingsModal(on_close: Callback<()>, on_save: Callback<()>) -> impl IntoView {
    let push_mode = RwSignal::new(PUSH_MODES[0].to_string());
    let quiet_from = RwSignal::new("22:00".to_string());
    let quiet_to = RwSignal::new("08:00".to_string());

    view! {
        <ModalFrame title="Notification Settings" on_close=on_close>
            <div class="form__group">
                <Label>"Email Notifications"</Label>
                {EMAIL_TOPICS
                    .iter()
                    .enumerate()
                    .map(|(idx, topic)| view! { <Checkbox label=*topic checked=RwSignal::new(idx < 2) /> })
                    .collect_view()}
            </div>
            <div class="form__group">
                <Label>"Push Notifications"</Label>
                <Select value=push_mode>
                    {PUSH_MODES.iter().map(|m| view! { <option value=*m>{*m}</option> }).collect_view()}
                </Select>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Quiet hours from"</Label>
                    <Input value=quiet_from input_type=InputType::Time />
                </div>
                <div class="form__group">
                    <Label>"to"</Label>
                    <Input value=quiet_to input_type=InputType::Time />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save Settings"
                </Button>
            </div>
        </ModalFrame>
    }
}
