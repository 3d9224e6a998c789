use super::aggregate::{FileItem, FileType};

fn file(id: u32, name: &str, file_type: FileType, size: &str, uploaded_by: &str, uploaded_at: &str, folder: &str) -> FileItem {
    FileItem {
        id,
        name: name.to_string(),
        file_type,
        size: size.to_string(),
        uploaded_by: uploaded_by.to_string(),
        uploaded_at: uploaded_at.to_string(),
        folder: folder.to_string(),
    }
}

pub fn mock_files() -> Vec<FileItem> {
    use FileType::*;

    vec![
        file(1, "company-logo.png", Image, "2.4 MB", "Jane Cooper", "2024-03-10", "Images"),
        file(2, "quarterly-report-2024.pdf", Document, "5.1 MB", "Cody Fisher", "2024-03-08", "Documents"),
        file(3, "product-demo.mp4", Video, "124.5 MB", "Kristin Watson", "2024-03-05", "Videos"),
        file(4, "invoice-template.docx", Document, "892 KB", "Robert Fox", "2024-03-01", "Templates"),
        file(5, "hero-image.jpg", Image, "3.2 MB", "Darlene Robertson", "2024-02-28", "Images"),
        file(6, "background-music.mp3", Audio, "4.8 MB", "Jane Cooper", "2024-02-25", "Archives"),
        file(7, "user-manual.pdf", Document, "12.3 MB", "Cody Fisher", "2024-02-20", "Documents"),
        file(8, "screenshot-2024.png", Image, "1.8 MB", "Kristin Watson", "2024-02-15", "Images"),
    ]
}
