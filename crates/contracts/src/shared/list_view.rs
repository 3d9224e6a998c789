//! Универсальный конвейер списков: поиск → категориальные фильтры → сортировка.
//!
//! Каждая списочная страница описывает свои записи через три trait'а
//! ([`Searchable`], [`Filterable`], [`Sortable`]) и получает отображаемую
//! выборку через [`derive_view`]. Результат — чистая функция от
//! `(source, query)`: ссылки на элементы источника в детерминированном порядке.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Значение селекта "без ограничения".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Выбор в категориальном фильтре.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parses a `<select>` value, `"all"` meaning no constraint.
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value,
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

/// Значение поля, извлечённое для сравнения при сортировке.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    /// Numeric value of a formatted string such as `"$2,499/year"` or `"2.4 MB"`.
    pub fn numeric_from(text: &str) -> SortValue<'static> {
        SortValue::Number(parse_numeric(text))
    }

    fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (a, b) => compare_text(&a.to_text(), &b.to_text()),
        }
    }

    fn to_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(t) => (*t).to_string(),
        }
    }
}

/// Strips everything except digits and the decimal point, then parses the
/// longest `digits[.digits]` prefix: `"1.2.3"` gives `1.2`.
/// Unparsable input yields `0.0`.
pub fn parse_numeric(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let end = match cleaned.find('.') {
        Some(dot) => cleaned[dot + 1..]
            .find('.')
            .map_or(cleaned.len(), |next| dot + 1 + next),
        None => cleaned.len(),
    };
    cleaned[..end].parse::<f64>().unwrap_or(0.0)
}

/// `true` for strings that start with a valid `YYYY-MM-DD` date.
pub fn is_date_like(text: &str) -> bool {
    text.get(..10)
        .map(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok())
        .unwrap_or(false)
}

fn compare_text(a: &str, b: &str) -> Ordering {
    if is_date_like(a) && is_date_like(b) {
        return a.cmp(b);
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Trait для записей, поддерживающих текстовый поиск
pub trait Searchable {
    /// Поля, по которым выполняется поиск (включая элементы массивов, например теги)
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Trait для записей с категориальными полями
pub trait Filterable<F> {
    fn filter_value(&self, field: F) -> &str;
}

/// Trait для записей, поддерживающих сортировку
pub trait Sortable<K> {
    fn sort_value(&self, key: K) -> SortValue<'_>;

    fn compare_by(&self, other: &Self, key: K) -> Ordering
    where
        K: Copy,
    {
        self.sort_value(key).compare(&other.sort_value(key))
    }
}

/// Состояние запроса списочной страницы.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F: Ord, K> {
    pub search_text: String,
    pub filters: BTreeMap<F, Selection>,
    pub sort_key: K,
    pub sort_direction: SortDirection,
}

impl<F: Ord + Copy, K: Copy + PartialEq> ListQuery<F, K> {
    pub fn new(sort_key: K, sort_direction: SortDirection) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort_key,
            sort_direction,
        }
    }

    pub fn with_filter(mut self, field: F, selection: Selection) -> Self {
        self.set_filter(field, selection);
        self
    }

    pub fn set_filter(&mut self, field: F, selection: Selection) {
        self.filters.insert(field, selection);
    }

    pub fn selection(&self, field: F) -> Selection {
        self.filters.get(&field).cloned().unwrap_or_default()
    }

    /// Header click: the active key flips direction, another key starts ascending.
    pub fn toggle_sort(&mut self, key: K) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Resets search text and every filter, keeping the sort.
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.filters.clear();
    }

    /// Same rule as [`derive_view`]: any non-empty search text constrains.
    pub fn is_filtered(&self) -> bool {
        !self.search_text.is_empty()
            || self.filters.values().any(|s| *s != Selection::All)
    }
}

/// Вычисляет отображаемую выборку: фильтр по тексту, категориальные фильтры,
/// стабильная сортировка по `sort_key` с учётом направления.
pub fn derive_view<'a, T, F, K>(source: &'a [T], query: &ListQuery<F, K>) -> Vec<&'a T>
where
    T: Searchable + Filterable<F> + Sortable<K>,
    F: Ord + Copy,
    K: Copy,
{
    let needle = query.search_text.to_lowercase();

    let mut view: Vec<&T> = source
        .iter()
        .filter(|item| item.matches_search(&needle))
        .filter(|item| {
            query
                .filters
                .iter()
                .all(|(field, selection)| selection.admits(item.filter_value(*field)))
        })
        .collect();

    // sort_by стабильна: равные ключи сохраняют исходный порядок в обоих направлениях
    view.sort_by(|a, b| {
        query
            .sort_direction
            .apply(a.compare_by(b, query.sort_key))
    });
    view
}

/// Страница выборки.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-indexed, always within `0..total_pages`
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Cuts one page out of a derived view, clamping `page` into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    };
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);

    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: &'static str,
        status: &'static str,
        tags: Vec<&'static str>,
        joined: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum RowFilter {
        Status,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowKey {
        Name,
        Price,
        Status,
        Joined,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.tags.iter().copied());
            fields
        }
    }

    impl Filterable<RowFilter> for Row {
        fn filter_value(&self, field: RowFilter) -> &str {
            match field {
                RowFilter::Status => self.status,
            }
        }
    }

    impl Sortable<RowKey> for Row {
        fn sort_value(&self, key: RowKey) -> SortValue<'_> {
            match key {
                RowKey::Name => SortValue::Text(self.name),
                RowKey::Price => SortValue::numeric_from(self.price),
                RowKey::Status => SortValue::Text(self.status),
                RowKey::Joined => SortValue::Text(self.joined),
            }
        }
    }

    fn row(name: &'static str, price: &'static str, status: &'static str) -> Row {
        Row {
            name,
            price,
            status,
            tags: Vec::new(),
            joined: "2024-01-01",
        }
    }

    fn names<'a>(view: &[&'a Row]) -> Vec<&'a str> {
        view.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_sort_formatted_prices_numerically() {
        let source = vec![row("Alpha", "$10", "Active"), row("beta", "$2", "Active")];
        let query = ListQuery::<RowFilter, RowKey>::new(RowKey::Price, SortDirection::Ascending);

        let view = derive_view(&source, &query);
        assert_eq!(names(&view), vec!["beta", "Alpha"]);
    }

    #[test]
    fn test_status_filter_keeps_original_order() {
        let source = vec![
            row("One", "$1", "Active"),
            row("Two", "$2", "Suspended"),
            row("Three", "$3", "Active"),
        ];
        let query = ListQuery::new(RowKey::Status, SortDirection::Ascending)
            .with_filter(RowFilter::Status, Selection::Only("Active".into()));

        let view = derive_view(&source, &query);
        assert_eq!(names(&view), vec!["One", "Three"]);
    }

    #[test]
    fn test_all_selection_is_unconstrained() {
        let source = vec![row("One", "$1", "Active"), row("Two", "$2", "Invited")];
        let query = ListQuery::new(RowKey::Name, SortDirection::Ascending)
            .with_filter(RowFilter::Status, Selection::from_select_value("all"));

        assert_eq!(derive_view(&source, &query).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_tags() {
        let mut tagged = row("Launch notes", "$0", "Active");
        tagged.tags = vec!["Release", "Roadmap"];
        let source = vec![row("Alpha", "$1", "Active"), tagged, row("ALPHABET", "$2", "Active")];

        let mut query = ListQuery::<RowFilter, RowKey>::new(RowKey::Name, SortDirection::Ascending);
        query.search_text = "alpha".into();
        assert_eq!(names(&derive_view(&source, &query)), vec!["Alpha", "ALPHABET"]);

        query.search_text = "ROADMAP".into();
        assert_eq!(names(&derive_view(&source, &query)), vec!["Launch notes"]);
    }

    #[test]
    fn test_ties_keep_source_order_in_both_directions() {
        let source = vec![
            row("First", "$5", "Active"),
            row("Second", "$1", "Active"),
            row("Third", "$5", "Active"),
        ];
        let mut query = ListQuery::<RowFilter, RowKey>::new(RowKey::Price, SortDirection::Ascending);
        assert_eq!(names(&derive_view(&source, &query)), vec!["Second", "First", "Third"]);

        query.sort_direction = SortDirection::Descending;
        assert_eq!(names(&derive_view(&source, &query)), vec!["First", "Third", "Second"]);
    }

    #[test]
    fn test_derive_view_is_pure() {
        let source = vec![row("b", "$1", "Active"), row("a", "$1", "Active")];
        let query = ListQuery::<RowFilter, RowKey>::new(RowKey::Name, SortDirection::Descending);

        let first = derive_view(&source, &query);
        let second = derive_view(&source, &query);
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn test_iso_dates_compare_lexicographically() {
        let mut older = row("Older", "$0", "Active");
        older.joined = "2023-12-31";
        let mut newer = row("Newer", "$0", "Active");
        newer.joined = "2024-02-01";
        let source = vec![newer, older];
        let query = ListQuery::<RowFilter, RowKey>::new(RowKey::Joined, SortDirection::Ascending);

        assert_eq!(names(&derive_view(&source, &query)), vec!["Older", "Newer"]);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("$2,499/year"), 2499.0);
        assert_eq!(parse_numeric("2.4 MB"), 2.4);
        assert_eq!(parse_numeric("—"), 0.0);
        assert_eq!(parse_numeric("1.2.3"), 1.2);
        assert_eq!(parse_numeric("v2.0.1"), 2.0);
        assert_eq!(parse_numeric(".5"), 0.5);
        assert_eq!(parse_numeric("."), 0.0);
    }

    #[test]
    fn test_is_filtered_agrees_with_view() {
        let source = vec![row("Alpha", "$1", "Active"), row("beta", "$2", "Active")];
        let mut query = ListQuery::<RowFilter, RowKey>::new(RowKey::Name, SortDirection::Ascending);
        assert!(!query.is_filtered());
        assert_eq!(derive_view(&source, &query).len(), source.len());

        query.search_text = "  ".into();
        assert!(query.is_filtered());
        assert!(derive_view(&source, &query).len() < source.len());
    }

    #[test]
    fn test_date_like_detection() {
        assert!(is_date_like("2024-03-15"));
        assert!(is_date_like("2024-03-15T14:02:26Z"));
        assert!(!is_date_like("2024-13-40"));
        assert!(!is_date_like("2m ago"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = ListQuery::<RowFilter, RowKey>::new(RowKey::Name, SortDirection::Ascending);
        query.toggle_sort(RowKey::Name);
        assert_eq!(query.sort_direction, SortDirection::Descending);

        query.toggle_sort(RowKey::Price);
        assert_eq!(query.sort_key, RowKey::Price);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=7).collect();

        let page = paginate(&items, 1, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_pages, 3);

        let last = paginate(&items, 10, 3);
        assert_eq!(last.page, 2);
        assert_eq!(last.items, vec![7]);

        let empty = paginate::<u32>(&[], 0, 25);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }
}
