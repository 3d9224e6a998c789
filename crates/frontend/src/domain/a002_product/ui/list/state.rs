use crate::shared::list_state::ListState;
use contracts::domain::a002_product::{ProductFilter, ProductSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type ProductListState = ListState<ProductFilter, ProductSortKey>;

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ListState::new(ProductSortKey::Name, SortDirection::Ascending))
}
