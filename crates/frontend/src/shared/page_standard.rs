//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_user--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part matches the module directory, so an id copied from the
//! DOM inspector leads straight to `domain/a001_user/`.

/// Table of records with search, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview with stat cards and panels.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Workspace, profile and account forms.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_user--list"));
        assert!(is_valid_page_id("d400_dashboard--dashboard"));
        assert!(!is_valid_page_id("a001_user"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_user--wizard"));
    }
}
