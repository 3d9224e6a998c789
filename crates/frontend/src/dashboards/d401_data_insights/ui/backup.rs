use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::dashboards::d401_data_insights::{BackupDraft, BackupKind, BACKUP_TABLES};
use leptos::prelude::*;
use thaw::*;

/// Форма резервной копии. Проверенный черновик уходит в `on_create`.
#[component]
pub fn CreateBackupModal(on_close: Callback<()>, on_create: Callback<BackupDraft>) -> impl IntoView {
    let toasts = use_notifications();
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(BackupKind::Full.as_str().to_string());
    let selection = RwSignal::new(BackupDraft::default());

    let submit = move |_| {
        let mut draft = selection.get_untracked();
        draft.name = name.get_untracked();
        draft.kind = BackupKind::parse(&kind.get_untracked()).unwrap_or(BackupKind::Full);
        if let Err(e) = draft.validate() {
            toasts.validation_failed(&e);
            return;
        }
        on_create.run(draft);
    };

    view! {
        <ModalFrame title="Create Backup" on_close=on_close>
            <div class="form__group">
                <Label>"Backup Name *"</Label>
                <Input value=name placeholder="e.g., Daily Backup - March 15" />
            </div>
            <div class="form__group">
                <Label>"Backup Type"</Label>
                <Select value=kind>
                    {BackupKind::ALL
                        .iter()
                        .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Include Tables"</Label>
                <div class="checkbox-grid">
                    {BACKUP_TABLES.iter().map(|&table| view! {
                        <label class="checkbox-grid__item">
                            <input
                                type="checkbox"
                                prop:checked=move || selection.with(|d| d.tables.contains(&table))
                                on:change=move |_| selection.update(|d| d.toggle_table(table))
                            />
                            <span>{table}</span>
                        </label>
                    }).collect_view()}
                </div>
                <p class="form__hint">"The backup is downloaded as a JSON file."</p>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create Backup"
                </Button>
            </div>
        </ModalFrame>
    }
}
