//! Чтение выбранных пользователем файлов (input[type=file] и drag & drop).

use wasm_bindgen::JsCast;
use web_sys::{FileList, HtmlInputElement};

/// Метаданные выбранного файла. Содержимое не читается.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub size_bytes: f64,
    pub mime: String,
}

fn collect(list: Option<FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|f| PickedFile {
            name: f.name(),
            size_bytes: f.size(),
            mime: f.type_(),
        })
        .collect()
}

/// Files from an `<input type="file">` change event. Clears the input so the
/// same file can be picked again.
pub fn files_from_input(ev: &leptos::ev::Event) -> Vec<PickedFile> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = collect(input.files());
    input.set_value("");
    files
}

pub fn files_from_drop(ev: &leptos::ev::DragEvent) -> Vec<PickedFile> {
    collect(ev.data_transfer().and_then(|dt| dt.files()))
}
