pub mod state;

use self::state::create_state;
use super::details::ContentDetails;
use super::editor::ContentEditorModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::export::{download_text, MIME_TEXT};
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::number_format::format_thousands;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a003_content::mock::mock_content;
use contracts::domain::a003_content::{
    ContentDraft, ContentFilter, ContentItem, ContentSortKey, ContentStatus, ContentType, SaveAction,
};
use contracts::shared::format::file_stem;
use leptos::prelude::*;
use thaw::*;

pub fn status_tone(status: ContentStatus) -> Tone {
    match status {
        ContentStatus::Published => Tone::Success,
        ContentStatus::Draft => Tone::Warning,
        ContentStatus::Scheduled => Tone::Info,
        ContentStatus::Archived => Tone::Neutral,
    }
}

fn saved_message(action: SaveAction, edited: bool, title: &str) -> String {
    match (action, edited) {
        (SaveAction::Draft, _) => "Content saved as draft!".to_string(),
        (SaveAction::Publish, true) => format!("Content \"{title}\" updated and published!"),
        (SaveAction::Publish, false) => "Content published successfully!".to_string(),
    }
}

/// Состояние редактора: закрыт, новый материал или правка существующего.
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(ContentItem),
}

#[component]
pub fn ContentList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let items = RwSignal::new(mock_content());
    let state = create_state();
    let list = use_list_view(items.into(), state);

    let selected = RwSignal::new(None::<ContentItem>);
    let editor = RwSignal::new(Editor::Closed);

    let on_save = Callback::new(move |(draft, action): (ContentDraft, SaveAction)| {
        let existing = match editor.get_untracked() {
            Editor::Edit(item) => Some(item),
            _ => None,
        };
        let next_id = items.with_untracked(|list| list.iter().map(|c| c.id).max().unwrap_or(0) + 1);
        let author = ctx.current_user.with_untracked(|u| u.name.clone());

        match draft.build(action, existing.as_ref(), next_id, &author, &today_iso()) {
            Ok(saved) => {
                toasts.success(saved_message(action, existing.is_some(), &saved.title));
                items.update(|list| match list.iter_mut().find(|c| c.id == saved.id) {
                    Some(slot) => *slot = saved,
                    None => list.push(saved),
                });
                editor.set(Editor::Closed);
            }
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    });

    let on_open = Callback::new(move |item: ContentItem| {
        toasts.info(format!("Opening \"{}\" in new tab...", item.title));
    });

    let on_download = Callback::new(move |item: ContentItem| {
        let filename = format!("{}.txt", file_stem(&item.title));
        match download_text(&item.to_text_document(), &filename, MIME_TEXT) {
            Ok(()) => toasts.success(format!("Content \"{}\" downloaded", item.title)),
            Err(e) => toasts.error(e),
        };
    });

    let on_edit = Callback::new(move |item: ContentItem| {
        selected.set(None);
        editor.set(Editor::Edit(item));
    });

    let on_delete = Callback::new(move |item: ContentItem| {
        items.update(|list| list.retain(|c| c.id != item.id));
        selected.set(None);
        log::info!("content {} deleted", item.id);
        toasts.success(format!("Content \"{}\" deleted", item.title));
    });

    let count_status = move |status: ContentStatus| {
        Signal::derive(move || items.with(|c| c.iter().filter(|x| x.status == status).count().to_string()))
    };

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a003_content--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Content Management"
                subtitle="Create, edit, and publish articles, pages, and documents."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                    {icon("plus")}
                    "New Content"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Content"
                        icon_name="file-text"
                        value=Signal::derive(move || items.with(|c| c.len().to_string()))
                    />
                    <StatCard label="Published" icon_name="check" value=count_status(ContentStatus::Published) />
                    <StatCard label="Drafts" icon_name="edit" value=count_status(ContentStatus::Draft) />
                    <StatCard
                        label="Total Views"
                        icon_name="eye"
                        value=Signal::derive(move || {
                            items.with(|c| format_thousands(c.iter().map(|x| i64::from(x.views)).sum()))
                        })
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <span class="filter-panel__title">"All content"</span>
                        <span class="filter-panel__badge">
                            {move || format!("{} items", list.filtered.with(Vec::len))}
                        </span>
                    </div>
                    <div class="filter-panel-content">
                        <SearchInput
                            value=search
                            on_change=search_callback(state)
                            placeholder="Search by title, category, or tags..."
                        />
                        <FilterSelect
                            label="Status"
                            options=ContentStatus::ALL.iter().map(|s| s.as_str()).collect()
                            value=filter_signal(state, ContentFilter::Status)
                            on_change=filter_callback(state, ContentFilter::Status)
                        />
                        <FilterSelect
                            label="Types"
                            options=ContentType::ALL.iter().map(|t| t.as_str()).collect()
                            value=filter_signal(state, ContentFilter::Type)
                            on_change=filter_callback(state, ContentFilter::Type)
                        />
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No content found" on_reset=reset_callback(state) />
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Title" sort_key=ContentSortKey::Title current=sort on_sort=on_sort min_width=240.0 />
                                    <SortableHeaderCell label="Type" sort_key=ContentSortKey::Type current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Status" sort_key=ContentSortKey::Status current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=140.0>"Author"</TableHeaderCell>
                                    <SortableHeaderCell label="Created" sort_key=ContentSortKey::CreatedAt current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Updated" sort_key=ContentSortKey::UpdatedAt current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Views" sort_key=ContentSortKey::Views current=sort on_sort=on_sort align="right" />
                                    <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.page.get().items
                                    key=|c: &ContentItem| (c.id, c.status, c.updated_at.clone(), c.title.clone())
                                    children=move |item: ContentItem| {
                                        let title = item.title.clone();
                                        let category = item.category.clone();
                                        let content_type = item.content_type.as_str();
                                        let status = item.status;
                                        let author = item.author.clone();
                                        let created = format_date(&item.created_at);
                                        let updated = format_date(&item.updated_at);
                                        let views = format_thousands(i64::from(item.views));
                                        let row = StoredValue::new(item);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div>
                                                            <strong><Highlighted text=title search=search /></strong>
                                                            {category.map(|c| view! {
                                                                <div class="table__subtext"><Highlighted text=c search=search /></div>
                                                            })}
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{content_type}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <ToneBadge tone=status_tone(status) text=status.as_str() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{author}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{created}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{updated}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{views}</TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| selected.set(Some(row.get_value()))
                                                    >
                                                        {icon("eye")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || list.page.with(|p| p.page))
                        total_pages=Signal::derive(move || list.page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || list.page.with(|p| p.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </Show>
            </div>

            {move || selected.get().map(|item| view! {
                <ContentDetails
                    item=item
                    on_close=Callback::new(move |_| selected.set(None))
                    on_open=on_open
                    on_edit=on_edit
                    on_download=on_download
                    on_delete=on_delete
                />
            })}

            {move || {
                let existing = match editor.get() {
                    Editor::Closed => return None,
                    Editor::New => None,
                    Editor::Edit(item) => Some(item),
                };
                Some(view! {
                    <ContentEditorModal
                        existing=existing
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                        on_save=on_save
                    />
                })
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_message() {
        assert_eq!(saved_message(SaveAction::Draft, true, "X"), "Content saved as draft!");
        assert_eq!(
            saved_message(SaveAction::Publish, true, "Homepage"),
            "Content \"Homepage\" updated and published!"
        );
        assert_eq!(saved_message(SaveAction::Publish, false, "X"), "Content published successfully!");
    }
}
