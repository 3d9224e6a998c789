//! Диалог импорта файла с имитацией загрузки.

use crate::shared::file_input::{files_from_drop, files_from_input, PickedFile};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::simulation::{simulate_progress, SimulatedProgress};
use crate::shared::toast::use_notifications;
use contracts::domain::a004_file::format_size;
use contracts::shared::validation;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Drop zone, type/size check, progress bar and an Import button.
///
/// `on_imported` runs once the simulated import reaches 100%; the page shows
/// its own success toast and closes the dialog.
#[component]
pub fn ImportModal(
    #[prop(into)]
    title: String,
    /// e.g. `"CSV up to 5MB"`
    #[prop(into)]
    hint: String,
    /// `accept` attribute of the file input
    accept: &'static str,
    allowed_extensions: &'static [&'static str],
    max_bytes: f64,
    /// Warning shown when Import is pressed without a file.
    missing_message: &'static str,
    /// Label of the progress bar, also used in logs.
    progress_label: &'static str,
    on_close: Callback<()>,
    on_imported: Callback<PickedFile>,
    /// Extra options rendered under the drop zone.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let toasts = use_notifications();
    let selected = RwSignal::new(None::<PickedFile>);
    let progress = RwSignal::new(None::<u32>);
    let is_dragging = RwSignal::new(false);

    let accept_file = move |files: Vec<PickedFile>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        match validation::upload(&file.name, file.size_bytes, allowed_extensions, max_bytes) {
            Ok(()) => selected.set(Some(file)),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_dragging.set(false);
        accept_file(files_from_drop(&ev));
    };

    let start_import = move |_| {
        let Some(file) = selected.get_untracked() else {
            toasts.warning(missing_message);
            return;
        };
        simulate_progress(progress_label, progress, move || {
            selected.set(None);
            on_imported.run(file);
        });
    };

    let is_importing = move || progress.get().is_some();

    view! {
        <ModalFrame title=title on_close=on_close>
            <div
                class="drop-zone"
                class:drop-zone--active=move || is_dragging.get()
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(true);
                }
                on:dragleave=move |_| is_dragging.set(false)
                on:drop=on_drop
            >
                {icon("upload")}
                {move || match selected.get() {
                    Some(file) => view! {
                        <div class="drop-zone__file">
                            <span class="drop-zone__file-name">{file.name.clone()}</span>
                            <span class="drop-zone__file-size">{format_size(file.size_bytes)}</span>
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="drop-zone__text">"Drag and drop a file here, or"</p>
                    }.into_any(),
                }}
                <label class="button button--secondary drop-zone__browse">
                    "Browse files"
                    <input
                        type="file"
                        accept=accept
                        style="display: none;"
                        on:change=move |ev| accept_file(files_from_input(&ev))
                    />
                </label>
                <p class="drop-zone__hint">{hint}</p>
            </div>

            <SimulatedProgress label=progress_label progress=progress />

            {children.map(|c| view! { <div class="modal-options">{c()}</div> })}

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=start_import
                    disabled=Signal::derive(is_importing)
                >
                    {move || if is_importing() { "Importing..." } else { "Import" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
