use super::aggregate::{ContentItem, ContentStatus, ContentType};

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    title: &str,
    content_type: ContentType,
    status: ContentStatus,
    author: &str,
    dates: (&str, &str),
    views: u32,
    category: &str,
    tags: &[&str],
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        content_type,
        status,
        author: author.to_string(),
        created_at: dates.0.to_string(),
        updated_at: dates.1.to_string(),
        views,
        category: Some(category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        scheduled_date: None,
    }
}

pub fn mock_content() -> Vec<ContentItem> {
    use ContentStatus::*;
    use ContentType::*;

    let mut preview = item(
        5,
        "New Feature Preview",
        Blog,
        Scheduled,
        "Darlene Robertson",
        ("2024-03-10", "2024-03-10"),
        0,
        "News",
        &["feature", "preview"],
    );
    preview.scheduled_date = Some("2024-03-15".to_string());

    vec![
        item(1, "Getting Started Guide", Article, Published, "Jane Cooper", ("2024-01-15", "2024-01-20"), 1245, "Documentation", &["guide", "tutorial", "beginner"]),
        item(2, "Product Launch Announcement", Blog, Published, "Cody Fisher", ("2024-02-10", "2024-02-10"), 3420, "News", &["product", "announcement"]),
        item(3, "API Documentation v2.0", Document, Draft, "Kristin Watson", ("2024-03-01", "2024-03-05"), 0, "Documentation", &["api", "technical"]),
        item(4, "Homepage Content", Page, Published, "Robert Fox", ("2024-01-05", "2024-02-15"), 15670, "Marketing", &["homepage", "landing"]),
        preview,
        item(6, "User Guide: Advanced Settings", Article, Archived, "Jane Cooper", ("2023-12-01", "2023-12-20"), 890, "Documentation", &["guide", "advanced"]),
    ]
}
