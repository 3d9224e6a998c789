/// Выгрузка данных в файл: CSV, JSON и простой текст через Blob + временную ссылку.
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const MIME_CSV: &str = "text/csv;charset=utf-8;";
pub const MIME_EXCEL: &str = "application/vnd.ms-excel";
pub const MIME_JSON: &str = "application/json";
pub const MIME_TEXT: &str = "text/plain;charset=utf-8;";

/// Trait для записей, выгружаемых в CSV
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds CSV content with a header line, comma separated.
pub fn build_csv<T: CsvExportable>(rows: &[&T]) -> String {
    let mut csv_content = T::headers().join(",");
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = row.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv_content.push_str(&cells.join(","));
        csv_content.push('\n');
    }
    csv_content
}

/// Выгружает строки в CSV и инициирует скачивание
pub fn export_csv<T: CsvExportable>(rows: &[&T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    download_text(&build_csv(rows), filename, MIME_CSV)
}

pub fn export_json<T: Serialize + ?Sized>(data: &T, filename: &str) -> Result<(), String> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    download_text(&content, filename, MIME_JSON)
}

/// Экранирует ячейку, если в ней есть разделитель, кавычки или перевод строки
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Скачивание произвольного текста как файла
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)?;
    log::info!("downloaded {filename} ({} bytes)", content.len());
    Ok(())
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let a = Row { name: "Jane", note: "plain" };
        let b = Row { name: "Smith, John", note: "says \"hi\"" };
        let csv = build_csv(&[&a, &b]);

        assert_eq!(
            csv,
            "Name,Note\nJane,plain\n\"Smith, John\",\"says \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_build_csv_header_only() {
        let csv = build_csv::<Row>(&[]);
        assert_eq!(csv, "Name,Note\n");
    }
}
