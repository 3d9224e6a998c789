use crate::shared::list_state::ListState;
use contracts::domain::a006_custom_field::{CustomFieldFilter, CustomFieldSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type CustomFieldListState = ListState<CustomFieldFilter, CustomFieldSortKey>;

pub fn create_state() -> RwSignal<CustomFieldListState> {
    RwSignal::new(ListState::new(CustomFieldSortKey::Name, SortDirection::Ascending))
}
