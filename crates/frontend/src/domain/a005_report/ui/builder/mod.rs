use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::domain::a005_report::{ExportFormat, Report, ReportDraft, ReportPeriod, ReportType};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ReportBuilderModal(
    next_id: u32,
    on_close: Callback<()>,
    on_create: Callback<Report>,
) -> impl IntoView {
    let toasts = use_notifications();
    let defaults = ReportDraft::default();
    let report_type = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let period = RwSignal::new(defaults.period.as_str().to_string());
    let format = RwSignal::new(defaults.format);

    let submit = move |_| {
        let draft = ReportDraft {
            report_type: ReportType::parse(&report_type.get_untracked()),
            name: name.get_untracked(),
            period: ReportPeriod::parse(&period.get_untracked()).unwrap_or(ReportPeriod::Last30Days),
            format: format.get_untracked(),
        };
        match draft.build(next_id) {
            Ok(report) => on_create.run(report),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Create New Report" on_close=on_close>
            <div class="form__group">
                <Label>"Report Type *"</Label>
                <Select value=report_type>
                    <option value="">"Select report type"</option>
                    {ReportType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                        .collect_view()}
                </Select>
                {move || {
                    ReportType::parse(&report_type.get())
                        .map(|t| view! { <p class="form__hint">{t.description()}</p> })
                }}
            </div>
            <div class="form__group">
                <Label>"Report Name *"</Label>
                <Input value=name placeholder="Enter report name" />
            </div>
            <div class="form__group">
                <Label>"Time Period *"</Label>
                <Select value=period>
                    {ReportPeriod::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Export Format"</Label>
                <div class="button-group">
                    {ExportFormat::ALL
                        .iter()
                        .map(|&f| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=Signal::derive(move || {
                                    if format.get() == f {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| format.set(f)
                            >
                                {f.as_str()}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Generate Report"
                </Button>
            </div>
        </ModalFrame>
    }
}
