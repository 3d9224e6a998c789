use crate::shared::list_state::ListState;
use contracts::domain::a003_content::{ContentFilter, ContentSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type ContentListState = ListState<ContentFilter, ContentSortKey>;

pub fn create_state() -> RwSignal<ContentListState> {
    RwSignal::new(ListState::new(ContentSortKey::UpdatedAt, SortDirection::Descending))
}
