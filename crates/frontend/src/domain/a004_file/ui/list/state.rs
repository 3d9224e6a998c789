use crate::shared::list_state::ListState;
use contracts::domain::a004_file::{FileFilter, FileSortKey};
use contracts::shared::list_view::SortDirection;
use leptos::prelude::*;

pub type FileListState = ListState<FileFilter, FileSortKey>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

pub fn create_state() -> RwSignal<FileListState> {
    RwSignal::new(ListState::new(FileSortKey::UploadedAt, SortDirection::Descending))
}
