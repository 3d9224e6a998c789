use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::dashboards::d401_data_insights::{Kpi, KpiCategory, KpiDraft, KpiUnit};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn KpiBuilderModal(next_id: u32, on_close: Callback<()>, on_create: Callback<Kpi>) -> impl IntoView {
    let toasts = use_notifications();
    let defaults = KpiDraft::default();
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(defaults.category.as_str().to_string());
    let unit = RwSignal::new(defaults.unit.as_str().to_string());
    let target = RwSignal::new(String::new());

    let submit = move |_| {
        let draft = KpiDraft {
            name: name.get_untracked(),
            category: KpiCategory::parse(&category.get_untracked()).unwrap_or(defaults.category),
            unit: KpiUnit::parse(&unit.get_untracked()).unwrap_or(defaults.unit),
            target: target.get_untracked(),
        };
        match draft.build(next_id) {
            Ok(kpi) => on_create.run(kpi),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Create Custom KPI" on_close=on_close>
            <div class="form__group">
                <Label>"KPI Name *"</Label>
                <Input value=name placeholder="e.g., Monthly Recurring Revenue" />
            </div>
            <div class="form__group">
                <Label>"Category"</Label>
                <Select value=category>
                    {KpiCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Unit"</Label>
                    <Select value=unit>
                        {KpiUnit::ALL
                            .iter()
                            .map(|u| view! { <option value=u.as_str()>{u.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Target Value *"</Label>
                    <Input value=target input_type=InputType::Number placeholder="e.g., 150000" />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create KPI"
                </Button>
            </div>
        </ModalFrame>
    }
}
