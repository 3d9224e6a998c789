//! Загрузка файлов с отдельным прогрессом на каждый файл.

use crate::shared::config::FILE_UPLOAD_MAX_BYTES;
use crate::shared::file_input::{files_from_drop, files_from_input, PickedFile};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::simulation::{simulate_progress, SimulatedProgress};
use crate::shared::toast::use_notifications;
use contracts::domain::a004_file::{format_size, FOLDERS};
use contracts::shared::validation;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Value of the folder select meaning "pick by file type".
const AUTO_FOLDER: &str = "auto";

/// Splits picked files into uploadable ones and rejection notes.
pub fn partition_by_size(files: Vec<PickedFile>, max_bytes: f64) -> (Vec<PickedFile>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        match validation::upload(&file.name, file.size_bytes, &[], max_bytes) {
            Ok(()) => accepted.push(file),
            Err(e) => rejected.push(format!("{} ({})", file.name, e)),
        }
    }
    (accepted, rejected)
}

#[derive(Clone)]
struct Upload {
    name: String,
    progress: RwSignal<Option<u32>>,
}

/// `on_uploaded` receives each file with its target folder as soon as that
/// file finishes. The modal closes by itself after the last one.
#[component]
pub fn UploadFilesModal(
    on_close: Callback<()>,
    on_uploaded: Callback<(PickedFile, Option<String>)>,
) -> impl IntoView {
    let toasts = use_notifications();
    let selected = RwSignal::new(Vec::<PickedFile>::new());
    let uploads = RwSignal::new(Vec::<Upload>::new());
    let folder = RwSignal::new(AUTO_FOLDER.to_string());
    let is_dragging = RwSignal::new(false);
    // progress signals belong to the modal, closing it abandons running uploads
    let owner = Owner::current();

    let add_files = move |files: Vec<PickedFile>| {
        selected.update(|list| list.extend(files));
    };

    let start_upload = move |_| {
        let files = selected.get_untracked();
        if files.is_empty() {
            toasts.warning("Please select files to upload");
            return;
        }
        let (accepted, rejected) = partition_by_size(files, FILE_UPLOAD_MAX_BYTES);
        if !rejected.is_empty() {
            toasts.error(format!("Some files exceed size limit: {}", rejected.join(", ")));
        }
        selected.set(Vec::new());
        if accepted.is_empty() {
            return;
        }

        let target = folder.get_untracked();
        let target = (target != AUTO_FOLDER).then_some(target);
        toasts.info(format!("Uploading {} file(s)...", accepted.len()));

        for file in accepted {
            let progress = match &owner {
                Some(owner) => owner.with(|| RwSignal::new(None::<u32>)),
                None => RwSignal::new(None::<u32>),
            };
            uploads.update(|list| list.push(Upload { name: file.name.clone(), progress }));
            let target = target.clone();
            simulate_progress("file upload", progress, move || {
                let Some(remaining) = uploads.try_update(|list| {
                    list.retain(|u| u.name != file.name);
                    list.len()
                }) else {
                    return;
                };
                on_uploaded.run((file, target));
                if remaining == 0 {
                    on_close.run(());
                }
            });
        }
    };

    let busy = move || uploads.with(|u| !u.is_empty());

    view! {
        <ModalFrame title="Upload Files" on_close=on_close>
            <div
                class="drop-zone"
                class:drop-zone--active=move || is_dragging.get()
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(true);
                }
                on:dragleave=move |_| is_dragging.set(false)
                on:drop=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(false);
                    add_files(files_from_drop(&ev));
                }
            >
                {icon("upload")}
                <p class="drop-zone__text">"Drag and drop files here, or"</p>
                <label class="button button--secondary drop-zone__browse">
                    "Browse files"
                    <input
                        type="file"
                        multiple=true
                        style="display: none;"
                        on:change=move |ev| add_files(files_from_input(&ev))
                    />
                </label>
                <p class="drop-zone__hint">"Any file type, up to 50MB each"</p>
            </div>

            <Show when=move || selected.with(|s| !s.is_empty())>
                <ul class="file-queue">
                    {move || selected.get().into_iter().map(|f| view! {
                        <li class="file-queue__item">
                            <span>{f.name.clone()}</span>
                            <span class="file-queue__size">{format_size(f.size_bytes)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </Show>

            <div class="form__group">
                <Label>"Destination folder"</Label>
                <Select value=folder>
                    <option value=AUTO_FOLDER>"By file type"</option>
                    {FOLDERS.iter().map(|f| view! { <option value=*f>{*f}</option> }).collect_view()}
                </Select>
            </div>

            <For
                each=move || uploads.get()
                key=|u: &Upload| u.name.clone()
                children=|u: Upload| view! { <SimulatedProgress label=u.name progress=u.progress /> }
            />

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=start_upload disabled=Signal::derive(busy)>
                    {move || if busy() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(name: &str, mb: f64) -> PickedFile {
        PickedFile {
            name: name.to_string(),
            size_bytes: mb * 1024.0 * 1024.0,
            mime: String::new(),
        }
    }

    #[test]
    fn test_partition_by_size() {
        let (ok, rejected) = partition_by_size(
            vec![picked("a.png", 1.0), picked("movie.mov", 120.0), picked("b.pdf", 49.9)],
            FILE_UPLOAD_MAX_BYTES,
        );
        assert_eq!(ok.len(), 2);
        assert_eq!(rejected, vec!["movie.mov (File size exceeds 50MB limit)".to_string()]);
    }
}
