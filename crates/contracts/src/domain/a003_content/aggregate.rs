use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum ContentStatus {
        Published => "Published",
        Draft => "Draft",
        Archived => "Archived",
        Scheduled => "Scheduled",
    }
}

crate::labelled_enum! {
    pub enum ContentType {
        Article => "Article",
        Page => "Page",
        Product => "Product",
        Blog => "Blog",
        Document => "Document",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    pub views: u32,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub scheduled_date: Option<String>,
}

impl ContentItem {
    /// Plain-text rendition offered for download from the view modal.
    pub fn to_text_document(&self) -> String {
        let mut doc = format!(
            "{}\n\nType: {}\nStatus: {}\nAuthor: {}\nCreated: {}\nUpdated: {}\nViews: {}\n",
            self.title,
            self.content_type,
            self.status,
            self.author,
            self.created_at,
            self.updated_at,
            self.views
        );
        if let Some(category) = &self.category {
            doc.push_str(&format!("Category: {category}\n"));
        }
        if !self.tags.is_empty() {
            doc.push_str(&format!("Tags: {}\n", self.tags.join(", ")));
        }
        if let Some(date) = &self.scheduled_date {
            doc.push_str(&format!("Scheduled for: {date}\n"));
        }
        doc
    }
}

/// Which editor button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Draft,
    Publish,
}

/// Editor form state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDraft {
    pub title: String,
    pub content_type: ContentType,
    pub body: String,
    pub category: String,
    /// Comma separated.
    pub tags: String,
    pub status: ContentStatus,
    pub scheduled_date: String,
}

impl Default for ContentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content_type: ContentType::Article,
            body: String::new(),
            category: String::new(),
            tags: String::new(),
            status: ContentStatus::Draft,
            scheduled_date: String::new(),
        }
    }
}

impl ContentDraft {
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            title: item.title.clone(),
            content_type: item.content_type,
            body: String::new(),
            category: item.category.clone().unwrap_or_default(),
            tags: item.tags.join(", "),
            status: item.status,
            scheduled_date: item.scheduled_date.clone().unwrap_or_default(),
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Applies the form on top of `existing` (edit) or creates a new item.
    ///
    /// `Draft` always stores a draft. `Publish` keeps a scheduled status when a
    /// date is set and publishes otherwise.
    pub fn build(
        &self,
        action: SaveAction,
        existing: Option<&ContentItem>,
        id: u32,
        author: &str,
        today: &str,
    ) -> Result<ContentItem, ValidationError> {
        let title = validation::required(&self.title, "a content title")?;
        let scheduled = non_empty(&self.scheduled_date);
        let status = match action {
            SaveAction::Draft => ContentStatus::Draft,
            SaveAction::Publish if self.status == ContentStatus::Scheduled && scheduled.is_some() => {
                ContentStatus::Scheduled
            }
            SaveAction::Publish => ContentStatus::Published,
        };

        Ok(ContentItem {
            id: existing.map_or(id, |e| e.id),
            title: title.to_string(),
            content_type: self.content_type,
            status,
            author: existing.map_or_else(|| author.to_string(), |e| e.author.clone()),
            created_at: existing.map_or_else(|| today.to_string(), |e| e.created_at.clone()),
            updated_at: today.to_string(),
            views: existing.map_or(0, |e| e.views),
            category: non_empty(&self.category),
            tags: self.tag_list(),
            scheduled_date: scheduled,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentFilter {
    Status,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSortKey {
    Title,
    Type,
    Status,
    CreatedAt,
    UpdatedAt,
    Views,
}

impl Searchable for ContentItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.category.as_deref());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Filterable<ContentFilter> for ContentItem {
    fn filter_value(&self, field: ContentFilter) -> &str {
        match field {
            ContentFilter::Status => self.status.as_str(),
            ContentFilter::Type => self.content_type.as_str(),
        }
    }
}

impl Sortable<ContentSortKey> for ContentItem {
    fn sort_value(&self, key: ContentSortKey) -> SortValue<'_> {
        match key {
            ContentSortKey::Title => SortValue::Text(&self.title),
            ContentSortKey::Type => SortValue::Text(self.content_type.as_str()),
            ContentSortKey::Status => SortValue::Text(self.status.as_str()),
            ContentSortKey::CreatedAt => SortValue::Text(&self.created_at),
            ContentSortKey::UpdatedAt => SortValue::Text(&self.updated_at),
            ContentSortKey::Views => SortValue::Number(f64::from(self.views)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_content::mock::mock_content;
    use crate::shared::list_view::{derive_view, ListQuery, SortDirection};

    fn query() -> ListQuery<ContentFilter, ContentSortKey> {
        ListQuery::new(ContentSortKey::UpdatedAt, SortDirection::Descending)
    }

    #[test]
    fn test_default_order_is_most_recently_updated() {
        let items = mock_content();
        let view = derive_view(&items, &query());
        assert_eq!(view[0].title, "New Feature Preview");
        assert_eq!(view.last().map(|c| c.id), Some(6));
    }

    #[test]
    fn test_search_hits_tags_and_category() {
        let items = mock_content();
        let mut q = query();

        q.search_text = "TUTORIAL".into();
        let ids: Vec<u32> = derive_view(&items, &q).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);

        q.search_text = "documentation".into();
        assert_eq!(derive_view(&items, &q).len(), 3);
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = ContentDraft::default();
        let err = draft
            .build(SaveAction::Publish, None, 9, "Alex Johnson", "2024-03-20")
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a content title");
    }

    #[test]
    fn test_edit_keeps_identity_and_views() {
        let items = mock_content();
        let original = &items[0];
        let mut draft = ContentDraft::from_item(original);
        draft.tags = "guide, , intro ".to_string();

        let saved = draft
            .build(SaveAction::Draft, Some(original), 99, "Someone", "2024-03-20")
            .unwrap();
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.author, original.author);
        assert_eq!(saved.views, original.views);
        assert_eq!(saved.status, ContentStatus::Draft);
        assert_eq!(saved.updated_at, "2024-03-20");
        assert_eq!(saved.tags, vec!["guide", "intro"]);
    }

    #[test]
    fn test_publish_respects_schedule_date() {
        let mut draft = ContentDraft {
            title: "Launch".to_string(),
            status: ContentStatus::Scheduled,
            ..ContentDraft::default()
        };
        let item = draft.build(SaveAction::Publish, None, 9, "A", "2024-03-20").unwrap();
        assert_eq!(item.status, ContentStatus::Published);

        draft.scheduled_date = "2024-04-01".to_string();
        let item = draft.build(SaveAction::Publish, None, 9, "A", "2024-03-20").unwrap();
        assert_eq!(item.status, ContentStatus::Scheduled);
        assert_eq!(item.created_at, "2024-03-20");
    }

    #[test]
    fn test_text_document() {
        let items = mock_content();
        let doc = items[0].to_text_document();
        assert!(doc.starts_with("Getting Started Guide\n"));
        assert!(doc.contains("Tags: guide, tutorial, beginner"));
    }
}
