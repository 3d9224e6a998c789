use crate::shared::list_state::ListState;
use contracts::domain::a005_report::{ReportFilter, ReportSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type ReportListState = ListState<ReportFilter, ReportSortKey>;

/// Newest first.
pub fn create_state() -> RwSignal<ReportListState> {
    RwSignal::new(ListState::new(ReportSortKey::CreatedAt, SortDirection::Descending))
}
