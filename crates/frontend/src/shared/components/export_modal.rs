use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a005_report::ExportFormat;
use leptos::prelude::*;

/// Выбор формата выгрузки. Сама выгрузка выполняется страницей в `on_export`.
#[component]
pub fn ExportModal(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: Option<String>,
    formats: &'static [ExportFormat],
    on_export: Callback<ExportFormat>,
    on_close: Callback<()>,
) -> impl IntoView {
    let description = description.unwrap_or_else(|| "Choose a format to export:".to_string());

    view! {
        <ModalFrame title=title on_close=on_close>
            <p class="modal-text">{description}</p>
            <div class="export-options">
                {formats.iter().map(|&format| view! {
                    <button class="export-option" on:click=move |_| on_export.run(format)>
                        {icon("download")}
                        <span>{format!("Export as {}", format.as_str())}</span>
                    </button>
                }).collect_view()}
            </div>
        </ModalFrame>
    }
}
