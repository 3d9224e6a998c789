use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum FileType {
        Image => "image",
        Document => "document",
        Video => "video",
        Audio => "audio",
        Other => "other",
    }
}

impl FileType {
    /// Classifies an upload by its MIME type.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_lowercase();
        if mime.starts_with("image/") {
            FileType::Image
        } else if mime.starts_with("video/") {
            FileType::Video
        } else if mime.starts_with("audio/") {
            FileType::Audio
        } else if ["pdf", "document", "text", "word", "excel", "spreadsheet"]
            .iter()
            .any(|needle| mime.contains(needle))
        {
            FileType::Document
        } else {
            FileType::Other
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileType::Image => "🖼️",
            FileType::Document => "📄",
            FileType::Video => "🎬",
            FileType::Audio => "🎵",
            FileType::Other => "📁",
        }
    }
}

pub const FOLDERS: [&str; 5] = ["Documents", "Images", "Videos", "Templates", "Archives"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: u32,
    pub name: String,
    pub file_type: FileType,
    /// Human readable size, e.g. `"2.4 MB"`
    pub size: String,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub folder: String,
}

impl FileItem {
    /// Record for a finished upload. `folder = None` picks one by type.
    pub fn from_upload(
        id: u32,
        name: &str,
        mime: &str,
        size_bytes: f64,
        uploaded_by: &str,
        today: &str,
        folder: Option<&str>,
    ) -> Self {
        let file_type = FileType::from_mime(mime);
        Self {
            id,
            name: name.to_string(),
            file_type,
            size: format_size(size_bytes),
            uploaded_by: uploaded_by.to_string(),
            uploaded_at: today.to_string(),
            folder: folder.unwrap_or_else(|| folder_for(file_type)).to_string(),
        }
    }

    /// Placeholder body for the simulated download.
    pub fn to_text_document(&self) -> String {
        format!(
            "{}\nType: {}\nSize: {}\nFolder: {}\nUploaded by {} on {}\n",
            self.name, self.file_type, self.size, self.folder, self.uploaded_by, self.uploaded_at
        )
    }
}

/// `2_516_582` → `"2.4 MB"`.
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes / KB)
    } else {
        format!("{bytes:.0} B")
    }
}

/// Inverse of [`format_size`]; unknown units count as bytes, garbage as 0.
pub fn parse_size(size: &str) -> f64 {
    let mut parts = size.split_whitespace();
    let value = parts.next().and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
    let factor = match parts.next().map(str::to_uppercase).as_deref() {
        Some("KB") => 1024.0,
        Some("MB") => 1024.0 * 1024.0,
        Some("GB") => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };
    value * factor
}

pub fn total_size(files: &[FileItem]) -> String {
    format_size(files.iter().map(|f| parse_size(&f.size)).sum())
}

/// Folder a freshly uploaded file lands in.
pub fn folder_for(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Image => "Images",
        FileType::Video => "Videos",
        FileType::Document => "Documents",
        FileType::Audio | FileType::Other => "Archives",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileFilter {
    Type,
    Folder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSortKey {
    Name,
    Type,
    Size,
    UploadedAt,
}

impl Searchable for FileItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Filterable<FileFilter> for FileItem {
    fn filter_value(&self, field: FileFilter) -> &str {
        match field {
            FileFilter::Type => self.file_type.as_str(),
            FileFilter::Folder => &self.folder,
        }
    }
}

impl Sortable<FileSortKey> for FileItem {
    fn sort_value(&self, key: FileSortKey) -> SortValue<'_> {
        match key {
            FileSortKey::Name => SortValue::Text(&self.name),
            FileSortKey::Type => SortValue::Text(self.file_type.as_str()),
            // numeric part only, units are not normalised
            FileSortKey::Size => SortValue::numeric_from(&self.size),
            FileSortKey::UploadedAt => SortValue::Text(&self.uploaded_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_file::mock::mock_files;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("2 KB"), 2048.0);
        assert_eq!(parse_size("1.5 MB"), 1.5 * 1024.0 * 1024.0);
        assert_eq!(parse_size("512 B"), 512.0);
        assert_eq!(parse_size("—"), 0.0);
        assert_eq!(format_size(parse_size("2.4 MB")), "2.4 MB");
    }

    #[test]
    fn test_from_upload_picks_folder_by_type() {
        let item = FileItem::from_upload(7, "clip.mp4", "video/mp4", 3.0 * 1024.0 * 1024.0, "Alex", "2024-03-20", None);
        assert_eq!(item.file_type, FileType::Video);
        assert_eq!(item.folder, "Videos");
        assert_eq!(item.size, "3.0 MB");

        let item = FileItem::from_upload(8, "notes.txt", "text/plain", 10.0, "Alex", "2024-03-20", Some("Templates"));
        assert_eq!(item.file_type, FileType::Document);
        assert_eq!(item.folder, "Templates");
    }

    #[test]
    fn test_folder_and_type_filters() {
        let files = mock_files();
        let query = ListQuery::new(FileSortKey::UploadedAt, SortDirection::Descending)
            .with_filter(FileFilter::Folder, Selection::Only("Images".into()))
            .with_filter(FileFilter::Type, Selection::Only("image".into()));

        let names: Vec<&str> = derive_view(&files, &query).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["company-logo.png", "hero-image.jpg", "screenshot-2024.png"]);
    }

    #[test]
    fn test_from_mime() {
        assert_eq!(FileType::from_mime("image/png"), FileType::Image);
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Document);
        assert_eq!(FileType::from_mime("application/vnd.ms-excel"), FileType::Document);
        assert_eq!(FileType::from_mime("application/zip"), FileType::Other);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(2_516_582.0), "2.4 MB");
        assert_eq!(format_size(913_408.0), "892 KB");
        assert_eq!(format_size(12.0), "12 B");
    }
}
