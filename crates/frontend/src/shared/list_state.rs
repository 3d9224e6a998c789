//! Состояние списочной страницы поверх конвейера `contracts::shared::list_view`.
//!
//! Каждая страница создаёт `RwSignal<ListState<F, K>>` в своём `state.rs`
//! и получает выборку через [`use_list_view`].

use super::config::DEFAULT_PAGE_SIZE;
use contracts::shared::list_view::{
    derive_view, paginate, Filterable, ListQuery, Page, Searchable, Selection, SortDirection,
    Sortable,
};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<F: Ord, K> {
    pub query: ListQuery<F, K>,
    /// 0-indexed
    pub page: usize,
    pub page_size: usize,
}

impl<F: Ord + Copy, K: Copy + PartialEq> ListState<F, K> {
    pub fn new(sort_key: K, sort_direction: SortDirection) -> Self {
        Self {
            query: ListQuery::new(sort_key, sort_direction),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn set_search(&mut self, text: String) {
        self.query.search_text = text;
        self.page = 0;
    }

    pub fn set_filter(&mut self, field: F, select_value: &str) {
        self.query
            .set_filter(field, Selection::from_select_value(select_value));
        self.page = 0;
    }

    pub fn toggle_sort(&mut self, key: K) {
        self.query.toggle_sort(key);
        self.page = 0;
    }

    /// Explicit key and direction, for sort dropdowns.
    pub fn set_sort(&mut self, key: K, direction: SortDirection) {
        self.query.sort_key = key;
        self.query.sort_direction = direction;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.query.reset_filters();
        self.page = 0;
    }
}

/// Derived selections of one list page.
pub struct ListView<T: Send + Sync + 'static> {
    /// Search, filters and sort applied, not paginated. Exports use this.
    pub filtered: Memo<Vec<T>>,
    pub page: Memo<Page<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

/// Recomputes the view whenever the source collection or the query changes.
pub fn use_list_view<T, F, K>(
    source: Signal<Vec<T>>,
    state: RwSignal<ListState<F, K>>,
) -> ListView<T>
where
    T: Searchable + Filterable<F> + Sortable<K> + Clone + PartialEq + Send + Sync + 'static,
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let filtered = Memo::new(move |_| {
        state.with(|s| {
            source.with(|items| {
                derive_view(items, &s.query)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<T>>()
            })
        })
    });

    let page = Memo::new(move |_| {
        let (page, page_size) = state.with(|s| (s.page, s.page_size));
        filtered.with(|items: &Vec<T>| paginate(items.as_slice(), page, page_size))
    });

    ListView { filtered, page }
}

pub fn sort_signal<F, K>(state: RwSignal<ListState<F, K>>) -> Signal<(K, SortDirection)>
where
    F: Ord + Send + Sync + 'static,
    K: Copy + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| (s.query.sort_key, s.query.sort_direction)))
}

pub fn sort_callback<F, K>(state: RwSignal<ListState<F, K>>) -> Callback<K>
where
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    Callback::new(move |key: K| state.update(|s| s.toggle_sort(key)))
}

pub fn search_signal<F, K>(state: RwSignal<ListState<F, K>>) -> Signal<String>
where
    F: Ord + Send + Sync + 'static,
    K: Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.query.search_text.clone()))
}

pub fn search_callback<F, K>(state: RwSignal<ListState<F, K>>) -> Callback<String>
where
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    Callback::new(move |text: String| state.update(|s| s.set_search(text)))
}

/// Current `<select>` value of a categorical filter.
pub fn filter_signal<F, K>(state: RwSignal<ListState<F, K>>, field: F) -> Signal<String>
where
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    Signal::derive(move || {
        state.with(|s| s.query.selection(field).as_select_value().to_string())
    })
}

pub fn filter_callback<F, K>(state: RwSignal<ListState<F, K>>, field: F) -> Callback<String>
where
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    Callback::new(move |value: String| state.update(|s| s.set_filter(field, &value)))
}

pub fn reset_callback<F, K>(state: RwSignal<ListState<F, K>>) -> Callback<()>
where
    F: Ord + Copy + Send + Sync + 'static,
    K: Copy + PartialEq + Send + Sync + 'static,
{
    Callback::new(move |_| state.update(|s| s.reset()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::SortValue;
    use leptos::reactive::owner::Owner;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Status,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        Name,
        Size,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        status: &'static str,
        size: f64,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    impl Filterable<Field> for Item {
        fn filter_value(&self, field: Field) -> &str {
            match field {
                Field::Status => self.status,
            }
        }
    }

    impl Sortable<Key> for Item {
        fn sort_value(&self, key: Key) -> SortValue<'_> {
            match key {
                Key::Name => SortValue::Text(self.name),
                Key::Size => SortValue::Number(self.size),
            }
        }
    }

    fn item(name: &'static str, status: &'static str, size: f64) -> Item {
        Item { name, status, size }
    }

    fn state_on_page(page: usize) -> ListState<Field, Key> {
        let mut state = ListState::new(Key::Name, SortDirection::Ascending);
        state.page = page;
        state
    }

    #[test]
    fn test_query_changes_return_to_first_page() {
        let mut state = state_on_page(3);
        state.set_search("pro".to_string());
        assert_eq!(state.page, 0);

        let mut state = state_on_page(3);
        state.set_filter(Field::Status, "Active");
        assert_eq!(state.page, 0);
        assert_eq!(state.query.selection(Field::Status), Selection::Only("Active".to_string()));

        let mut state = state_on_page(3);
        state.toggle_sort(Key::Size);
        assert_eq!(state.page, 0);
        assert_eq!(state.query.sort_key, Key::Size);
    }

    #[test]
    fn test_reset_keeps_sort_and_page_size() {
        let mut state = state_on_page(1);
        state.set_page_size(25);
        state.toggle_sort(Key::Name);
        state.set_search("x".to_string());
        state.set_filter(Field::Status, "Draft");
        state.reset();

        assert!(!state.query.is_filtered());
        assert_eq!(state.page_size, 25);
        assert_eq!(state.query.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_list_view_follows_query_and_page() {
        let owner = Owner::new();
        owner.with(|| {
            let items = RwSignal::new(vec![
                item("gamma", "Active", 3.0),
                item("alpha", "Active", 1.0),
                item("beta", "Draft", 2.0),
            ]);
            let state = RwSignal::new(ListState::<Field, Key>::new(Key::Name, SortDirection::Ascending));
            let view = use_list_view(items.into(), state);

            let names = |list: Vec<Item>| list.into_iter().map(|i| i.name).collect::<Vec<_>>();
            assert_eq!(names(view.filtered.get()), vec!["alpha", "beta", "gamma"]);

            state.update(|s| s.set_filter(Field::Status, "Active"));
            assert_eq!(names(view.filtered.get()), vec!["alpha", "gamma"]);

            state.update(|s| {
                s.set_page_size(1);
                s.page = 1;
            });
            let page = view.page.get();
            assert_eq!(names(page.items), vec!["gamma"]);
            assert_eq!((page.page, page.total_pages, page.total_count), (1, 2, 2));

            items.update(|list| list.push(item("delta", "Active", 4.0)));
            assert_eq!(view.page.get().total_count, 3);
        });
    }

    #[test]
    fn test_filter_all_clears_constraint() {
        let mut state = state_on_page(0);
        state.set_filter(Field::Status, "Active");
        state.set_filter(Field::Status, "all");
        assert!(!state.query.is_filtered());
    }
}
