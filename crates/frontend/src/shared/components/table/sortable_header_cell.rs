//! Сортируемая ячейка заголовка таблицы
//!
//! ```ignore
//! let sort = Signal::derive(move || state.with(|s| (s.query.sort_key, s.query.sort_direction)));
//! let on_sort = Callback::new(move |key| state.update(|s| s.query.toggle_sort(key)));
//!
//! <SortableHeaderCell label="Name" sort_key=UserSortKey::Name current=sort on_sort=on_sort />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: клик переключает сортировку по `sort_key`.
#[component]
pub fn SortableHeaderCell<K>(
    #[prop(into)]
    label: String,
    sort_key: K,
    /// Active key and direction of the list
    #[prop(into)]
    current: Signal<(K, SortDirection)>,
    on_sort: Callback<K>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView
where
    K: PartialEq + Copy + Send + Sync + 'static,
{
    let is_active = move || current.get().0 == sort_key;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class=move || get_sort_class(is_active())>
                    {move || get_sort_indicator(is_active(), current.get().1)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
