use crate::shared::list_state::ListState;
use contracts::domain::a001_user::{UserFilter, UserSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type UserListState = ListState<UserFilter, UserSortKey>;

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(ListState::new(UserSortKey::Name, SortDirection::Ascending))
}
