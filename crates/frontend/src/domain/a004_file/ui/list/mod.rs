pub mod state;

use self::state::{create_state, ViewMode};
use super::upload::UploadFilesModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::export::{download_text, MIME_TEXT};
use crate::shared::file_input::PickedFile;
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a004_file::mock::mock_files;
use contracts::domain::a004_file::{total_size, FileFilter, FileItem, FileSortKey, FileType, FOLDERS};
use contracts::shared::list_view::ALL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let files = RwSignal::new(mock_files());
    let state = create_state();
    let list = use_list_view(files.into(), state);

    let view_mode = RwSignal::new(ViewMode::Grid);
    let show_upload = RwSignal::new(false);

    let on_uploaded = Callback::new(move |(picked, folder): (PickedFile, Option<String>)| {
        let uploaded_by = ctx.current_user.with_untracked(|u| u.name.clone());
        files.update(|list| {
            let id = list.iter().map(|f| f.id).max().unwrap_or(0) + 1;
            list.push(FileItem::from_upload(
                id,
                &picked.name,
                &picked.mime,
                picked.size_bytes,
                &uploaded_by,
                &today_iso(),
                folder.as_deref(),
            ));
        });
        toasts.success(format!("File \"{}\" uploaded successfully!", picked.name));
    });

    let download = move |file: &FileItem| {
        match download_text(&file.to_text_document(), &file.name, MIME_TEXT) {
            Ok(()) => toasts.info(format!("Downloading {}...", file.name)),
            Err(e) => toasts.error(e),
        };
    };

    let delete = move |file: &FileItem| {
        let id = file.id;
        files.update(|list| list.retain(|f| f.id != id));
        toasts.success(format!("File \"{}\" deleted successfully!", file.name));
    };

    let count_type = move |file_type: FileType| {
        Signal::derive(move || files.with(|f| f.iter().filter(|x| x.file_type == file_type).count().to_string()))
    };

    let folder = filter_signal(state, FileFilter::Folder);
    let set_folder = filter_callback(state, FileFilter::Folder);
    let folder_count = move |name: &'static str| {
        move || files.with(|f| f.iter().filter(|x| name == ALL || x.folder == name).count())
    };

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a004_file--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="File Management"
                subtitle="Upload, organize, and manage your files. Support for images, documents, videos, and more."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_upload.set(true)>
                    {icon("upload")}
                    "Upload Files"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Files"
                        icon_name="folder"
                        value=Signal::derive(move || files.with(|f| f.len().to_string()))
                    />
                    <StatCard
                        label="Total Size"
                        icon_name="database"
                        value=Signal::derive(move || files.with(|f| total_size(f)))
                    />
                    <StatCard label="Images" icon_name="eye" value=count_type(FileType::Image) />
                    <StatCard label="Documents" icon_name="file-text" value=count_type(FileType::Document) />
                </div>

                <div class="files-layout">
                    <aside class="folder-list">
                        <div class="folder-list__title">"Folders"</div>
                        {std::iter::once((ALL, "All Files"))
                            .chain(FOLDERS.iter().map(|f| (*f, *f)))
                            .map(|(value, label)| {
                                let count = folder_count(value);
                                view! {
                                    <button
                                        class="folder-list__item"
                                        class:folder-list__item--active=move || folder.get() == value
                                        on:click=move |_| set_folder.run(value.to_string())
                                    >
                                        {icon("folder")}
                                        <span>{label}</span>
                                        <span class="folder-list__count">{count}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </aside>

                    <div class="files-main">
                        <div class="filter-panel">
                            <div class="filter-panel-content">
                                <SearchInput value=search on_change=search_callback(state) placeholder="Search files..." />
                                <FilterSelect
                                    label="Types"
                                    options=FileType::ALL.iter().map(|t| t.as_str()).collect()
                                    value=filter_signal(state, FileFilter::Type)
                                    on_change=filter_callback(state, FileFilter::Type)
                                />
                                <div class="segmented">
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || view_mode.get() == ViewMode::Grid
                                        title="Grid view"
                                        on:click=move |_| view_mode.set(ViewMode::Grid)
                                    >
                                        {icon("grid")}
                                    </button>
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || view_mode.get() == ViewMode::List
                                        title="List view"
                                        on:click=move |_| view_mode.set(ViewMode::List)
                                    >
                                        {icon("list")}
                                    </button>
                                </div>
                            </div>
                        </div>

                        <Show
                            when=move || list.filtered.with(|v| !v.is_empty())
                            fallback=move || view! {
                                <NoResults message="No files found" on_reset=reset_callback(state) />
                            }
                        >
                            {move || match view_mode.get() {
                                ViewMode::Grid => view! {
                                    <div class="file-grid">
                                        <For
                                            each=move || list.page.get().items
                                            key=|f: &FileItem| f.id
                                            children=move |file: FileItem| {
                                                let name = file.name.clone();
                                                let title = name.clone();
                                                let file = StoredValue::new(file);
                                                view! {
                                                    <div class="file-card">
                                                        <div class="file-card__icon">{file.with_value(|f| f.file_type.icon())}</div>
                                                        <div class="file-card__name" title=title>
                                                            <Highlighted text=name search=search />
                                                        </div>
                                                        <div class="file-card__meta">
                                                            {file.with_value(|f| format!("{} · {}", f.size, format_date(&f.uploaded_at)))}
                                                        </div>
                                                        <div class="file-card__actions">
                                                            <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| file.with_value(download)>
                                                                {icon("download")}
                                                            </Button>
                                                            <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| file.with_value(delete)>
                                                                {icon("trash")}
                                                            </Button>
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>
                                }.into_any(),
                                ViewMode::List => view! {
                                    <div class="table-wrapper">
                                        <Table attr:style="width: 100%;">
                                            <TableHeader>
                                                <TableRow>
                                                    <SortableHeaderCell label="Name" sort_key=FileSortKey::Name current=sort on_sort=on_sort min_width=240.0 />
                                                    <SortableHeaderCell label="Type" sort_key=FileSortKey::Type current=sort on_sort=on_sort />
                                                    <SortableHeaderCell label="Size" sort_key=FileSortKey::Size current=sort on_sort=on_sort align="right" />
                                                    <TableHeaderCell min_width=120.0>"Folder"</TableHeaderCell>
                                                    <TableHeaderCell min_width=140.0>"Uploaded By"</TableHeaderCell>
                                                    <SortableHeaderCell label="Uploaded" sort_key=FileSortKey::UploadedAt current=sort on_sort=on_sort />
                                                    <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                                                </TableRow>
                                            </TableHeader>
                                            <TableBody>
                                                <For
                                                    each=move || list.page.get().items
                                                    key=|f: &FileItem| f.id
                                                    children=move |file: FileItem| {
                                                        let file_icon = file.file_type.icon();
                                                        let file_type = file.file_type.as_str();
                                                        let name = file.name.clone();
                                                        let size = file.size.clone();
                                                        let folder = file.folder.clone();
                                                        let uploaded_by = file.uploaded_by.clone();
                                                        let uploaded = format_date(&file.uploaded_at);
                                                        let stored = StoredValue::new(file);
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span class="file-icon">{file_icon}</span>
                                                                        <Highlighted text=name search=search />
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell><TableCellLayout>{file_type}</TableCellLayout></TableCell>
                                                                <TableCell class="text-right">{size}</TableCell>
                                                                <TableCell><TableCellLayout>{folder}</TableCellLayout></TableCell>
                                                                <TableCell><TableCellLayout>{uploaded_by}</TableCellLayout></TableCell>
                                                                <TableCell><TableCellLayout>{uploaded}</TableCellLayout></TableCell>
                                                                <TableCell>
                                                                    <div class="table__actions">
                                                                        <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| stored.with_value(download)>
                                                                            {icon("download")}
                                                                        </Button>
                                                                        <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| stored.with_value(delete)>
                                                                            {icon("trash")}
                                                                        </Button>
                                                                    </div>
                                                                </TableCell>
                                                            </TableRow>
                                                        }
                                                    }
                                                />
                                            </TableBody>
                                        </Table>
                                    </div>
                                }.into_any(),
                            }}

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
                </div>
            </div>

            <Show when=move || show_upload.get()>
                <UploadFilesModal
                    on_close=Callback::new(move |_| show_upload.set(false))
                    on_uploaded=on_uploaded
                />
            </Show>
        </PageFrame>
    }
}
