use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::domain::a005_report::{ExportFormat, ReportType, ScheduleFrequency, ScheduleRequest};
use leptos::prelude::*;
use thaw::*;

const SCHEDULE_FORMATS: &[ExportFormat] = &[ExportFormat::Pdf, ExportFormat::Excel, ExportFormat::Csv];

#[component]
pub fn ScheduleReportModal(on_close: Callback<()>, on_schedule: Callback<ScheduleRequest>) -> impl IntoView {
    let toasts = use_notifications();
    let report_type = RwSignal::new(ReportType::Revenue.as_str().to_string());
    let frequency = RwSignal::new(ScheduleFrequency::Weekly.as_str().to_string());
    let recipients = RwSignal::new(String::new());
    let format = RwSignal::new(ExportFormat::Pdf.as_str().to_string());

    let submit = move |_| {
        let request = ScheduleRequest {
            report_type: ReportType::parse(&report_type.get_untracked()).unwrap_or(ReportType::Revenue),
            frequency: ScheduleFrequency::parse(&frequency.get_untracked())
                .unwrap_or(ScheduleFrequency::Weekly),
            recipients: recipients.get_untracked(),
            format: ExportFormat::parse(&format.get_untracked()).unwrap_or(ExportFormat::Pdf),
        };
        match request.recipients() {
            Ok(list) => {
                log::info!("report schedule: {} recipient(s)", list.len());
                on_schedule.run(request);
            }
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Schedule Report" on_close=on_close>
            <div class="form__group">
                <Label>"Report Type *"</Label>
                <Select value=report_type>
                    {ReportType::ALL
                        .iter()
                        .filter(|t| **t != ReportType::Custom)
                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Frequency *"</Label>
                <Select value=frequency>
                    {ScheduleFrequency::ALL
                        .iter()
                        .map(|f| view! { <option value=f.as_str()>{capitalize(f.as_str())}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Recipients *"</Label>
                <Input value=recipients placeholder="email@example.com, team@example.com" />
            </div>
            <div class="form__group">
                <Label>"Export Format *"</Label>
                <Select value=format>
                    {SCHEDULE_FORMATS
                        .iter()
                        .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Schedule Report"
                </Button>
            </div>
        </ModalFrame>
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("weekly"), "Weekly");
        assert_eq!(capitalize(""), "");
    }
}
