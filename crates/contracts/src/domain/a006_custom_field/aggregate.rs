use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum FieldType {
        Text => "text",
        Number => "number",
        Email => "email",
        Date => "date",
        Select => "select",
        Textarea => "textarea",
        Checkbox => "checkbox",
        File => "file",
    }
}

impl FieldType {
    pub fn icon(self) -> &'static str {
        match self {
            FieldType::Text => "📝",
            FieldType::Number => "🔢",
            FieldType::Email => "📧",
            FieldType::Date => "📅",
            FieldType::Select => "📋",
            FieldType::Textarea => "📄",
            FieldType::Checkbox => "☑️",
            FieldType::File => "📎",
        }
    }
}

crate::labelled_enum! {
    pub enum FieldCategory {
        User => "user",
        Product => "product",
        Order => "order",
        Content => "content",
        Custom => "custom",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub category: FieldCategory,
    pub required: bool,
    pub default_value: Option<String>,
    pub options: Vec<String>,
    pub created_at: String,
    pub usage_count: u32,
}

/// Черновик поля из конструктора.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomFieldDraft {
    pub name: String,
    pub label: String,
    pub field_type: Option<FieldType>,
    pub category: Option<FieldCategory>,
    pub required: bool,
    pub default_value: String,
    pub options: Vec<String>,
}

impl CustomFieldDraft {
    pub fn add_option(&mut self, value: &str) -> Result<(), ValidationError> {
        let value = validation::required(value, "an option value")?;
        if self.options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
            return Err(ValidationError::invalid(format!("Option \"{value}\" already exists")));
        }
        self.options.push(value.to_string());
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) {
        if index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// Validates the draft and builds the field with the given id and creation date.
    pub fn build(&self, id: u32, created_at: &str) -> Result<CustomField, ValidationError> {
        let name = validation::field_name(&self.name)?;
        let label = validation::required(&self.label, "a display label")?;
        let field_type = self.field_type.unwrap_or(FieldType::Text);
        if field_type == FieldType::Select && self.options.is_empty() {
            return Err(ValidationError::Required {
                field: "at least one option for select fields",
            });
        }

        let default_value = self.default_value.trim();
        Ok(CustomField {
            id,
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            category: self.category.unwrap_or(FieldCategory::Custom),
            required: self.required,
            default_value: (!default_value.is_empty()).then(|| default_value.to_string()),
            options: if field_type == FieldType::Select {
                self.options.clone()
            } else {
                Vec::new()
            },
            created_at: created_at.to_string(),
            usage_count: 0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomFieldFilter {
    Category,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomFieldSortKey {
    Name,
    Label,
    Type,
    Usage,
    CreatedAt,
}

impl Searchable for CustomField {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.label.as_str()]
    }
}

impl Filterable<CustomFieldFilter> for CustomField {
    fn filter_value(&self, field: CustomFieldFilter) -> &str {
        match field {
            CustomFieldFilter::Category => self.category.as_str(),
            CustomFieldFilter::Type => self.field_type.as_str(),
        }
    }
}

impl Sortable<CustomFieldSortKey> for CustomField {
    fn sort_value(&self, key: CustomFieldSortKey) -> SortValue<'_> {
        match key {
            CustomFieldSortKey::Name => SortValue::Text(&self.name),
            CustomFieldSortKey::Label => SortValue::Text(&self.label),
            CustomFieldSortKey::Type => SortValue::Text(self.field_type.as_str()),
            CustomFieldSortKey::Usage => SortValue::Number(f64::from(self.usage_count)),
            CustomFieldSortKey::CreatedAt => SortValue::Text(&self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_custom_field::mock::mock_custom_fields;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};
    use crate::shared::notifications::NotificationKind;

    #[test]
    fn test_category_filter_with_search() {
        let fields = mock_custom_fields();
        let mut query = ListQuery::new(CustomFieldSortKey::Name, SortDirection::Ascending)
            .with_filter(CustomFieldFilter::Category, Selection::Only("user".into()));
        query.search_text = "tier".into();

        let names: Vec<&str> = derive_view(&fields, &query).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["subscription_tier"]);
    }

    #[test]
    fn test_options_are_trimmed_and_unique() {
        let mut draft = CustomFieldDraft::default();
        draft.add_option("  Free ").unwrap();
        assert_eq!(draft.options, vec!["Free"]);
        assert_eq!(draft.add_option("free").unwrap_err().kind(), NotificationKind::Error);
        assert_eq!(draft.add_option(" ").unwrap_err().kind(), NotificationKind::Warning);

        draft.remove_option(5);
        draft.remove_option(0);
        assert!(draft.options.is_empty());
    }

    #[test]
    fn test_usage_sort() {
        let fields = mock_custom_fields();
        let query = ListQuery::<CustomFieldFilter, CustomFieldSortKey>::new(CustomFieldSortKey::Usage, SortDirection::Descending);
        assert_eq!(derive_view(&fields, &query)[0].usage_count, 512);
    }

    #[test]
    fn test_draft_requires_options_for_select() {
        let draft = CustomFieldDraft {
            name: "tier".into(),
            label: "Tier".into(),
            field_type: Some(FieldType::Select),
            ..Default::default()
        };
        assert_eq!(draft.build(8, "2024-03-20").unwrap_err().kind(), NotificationKind::Warning);

        let with_options = CustomFieldDraft {
            options: vec!["Free".into(), "Pro".into()],
            ..draft
        };
        let field = with_options.build(8, "2024-03-20").unwrap();
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.category, FieldCategory::Custom);
    }

    #[test]
    fn test_draft_rejects_bad_name() {
        let draft = CustomFieldDraft {
            name: "Bad Name".into(),
            label: "Bad".into(),
            ..Default::default()
        };
        assert_eq!(draft.build(9, "2024-03-20").unwrap_err().kind(), NotificationKind::Error);
    }
}
