/// Общие элементы списочных страниц: поиск, фильтры, пустое состояние, подсветка.
use contracts::shared::list_view::{SortDirection, ALL};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Кусок текста для подсветки: совпадение с поиском или нет.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

/// Splits `text` into plain and matching segments (case-insensitive).
pub fn highlight_segments(text: &str, filter: &str) -> Vec<Segment> {
    let filter = filter.trim();
    let ranges = if filter.is_empty() {
        Vec::new()
    } else {
        match_ranges(text, filter)
    };

    let mut segments = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            segments.push(Segment { text: text[last_pos..start].to_string(), is_match: false });
        }
        segments.push(Segment { text: text[start..end].to_string(), is_match: true });
        last_pos = end;
    }
    if last_pos < text.len() || segments.is_empty() {
        segments.push(Segment { text: text[last_pos..].to_string(), is_match: false });
    }
    segments
}

fn render_segments(segments: Vec<Segment>) -> AnyView {
    segments
        .into_iter()
        .map(|s| {
            if s.is_match {
                view! { <mark class="search-match">{s.text}</mark> }.into_any()
            } else {
                view! { <span>{s.text}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Сегменты, пересчитываемые при каждом изменении строки поиска.
pub fn live_segments(text: String, search: Signal<String>) -> Signal<Vec<Segment>> {
    Signal::derive(move || search.with(|q| highlight_segments(&text, q)))
}

/// Текст с подсветкой текущего поиска.
///
/// Строки `<For>` не пересоздаются при вводе, поэтому подсветка читает
/// сигнал поиска сама.
#[component]
pub fn Highlighted(#[prop(into)] text: String, search: Signal<String>) -> impl IntoView {
    let segments = live_segments(text, search);
    move || render_segments(segments.get())
}

/// Byte ranges of case-insensitive, non-overlapping matches of `filter` in `text`.
///
/// Ranges that would not land on char boundaries of the original text
/// (case folding changed the length) are skipped.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&filter_lower) {
        let start = from + pos;
        let end = start + filter_lower.len();
        if text.is_char_boundary(start) && text.is_char_boundary(end) {
            ranges.push((start, end));
        }
        from = end;
    }
    ranges
}

/// Поле поиска с кнопкой очистки. Запрос применяется на каждое нажатие.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            {icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Категориальный фильтр; значение `"all"` снимает ограничение.
#[component]
pub fn FilterSelect(
    label: &'static str,
    /// Option values, shown as-is
    options: Vec<&'static str>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| format!("All {}", label.to_lowercase()));

    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="filter-select__control"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=ALL>{all_label}</option>
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt>{opt}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Явное состояние "ничего не найдено".
#[component]
pub fn NoResults(
    #[prop(into)]
    message: String,
    /// Shows a reset button when provided
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="no-results">
            {icon("search")}
            <p class="no-results__message">{message}</p>
            {on_reset.map(|reset| view! {
                <button class="button button--secondary" on:click=move |_| reset.run(())>
                    "Clear filters"
                </button>
            })}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(is_active: bool, direction: SortDirection) -> &'static str {
    match (is_active, direction) {
        (false, _) => " ⇅",
        (true, SortDirection::Ascending) => " ▲",
        (true, SortDirection::Descending) => " ▼",
    }
}

pub fn get_sort_class(is_active: bool) -> &'static str {
    if is_active {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Alpha alpha", "ALP"), vec![(0, 3), (6, 9)]);
        assert!(match_ranges("Alpha", "zz").is_empty());
        assert!(match_ranges("Alpha", "").is_empty());
    }

    fn marked(segments: &[Segment]) -> Vec<&str> {
        segments.iter().filter(|s| s.is_match).map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight_segments("Alpha beta", "a");
        assert_eq!(marked(&segments), vec!["A", "a", "a"]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Alpha beta");

        assert_eq!(
            highlight_segments("Alpha", "  "),
            vec![Segment { text: "Alpha".to_string(), is_match: false }]
        );
        assert_eq!(highlight_segments("", "a").len(), 1);
    }

    #[test]
    fn test_live_segments_follow_search() {
        let owner = Owner::new();
        owner.with(|| {
            let search = RwSignal::new("a".to_string());
            let segments = live_segments("Alice Walker".to_string(), search.into());
            assert_eq!(marked(&segments.get()), vec!["A", "a"]);

            search.set("al".to_string());
            assert_eq!(marked(&segments.get()), vec!["Al", "al"]);

            search.set(String::new());
            assert!(marked(&segments.get()).is_empty());
        });
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(false, SortDirection::Descending), " ⇅");
        assert_eq!(get_sort_indicator(true, SortDirection::Ascending), " ▲");
        assert_eq!(get_sort_indicator(true, SortDirection::Descending), " ▼");
    }
}
