use super::list::status_tone;
use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_thousands;
use contracts::domain::a003_content::ContentItem;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContentDetails(
    item: ContentItem,
    on_close: Callback<()>,
    on_open: Callback<ContentItem>,
    on_edit: Callback<ContentItem>,
    on_download: Callback<ContentItem>,
    on_delete: Callback<ContentItem>,
) -> impl IntoView {
    let stored = StoredValue::new(item.clone());
    let run = move |cb: Callback<ContentItem>| move |_: leptos::ev::MouseEvent| cb.run(stored.get_value());

    view! {
        <ModalFrame title=item.title.clone() on_close=on_close>
            <div class="details-grid">
                <span class="details-grid__label">"Type"</span>
                <span>{item.content_type.as_str()}</span>
                <span class="details-grid__label">"Status"</span>
                <span><ToneBadge tone=status_tone(item.status) text=item.status.as_str() /></span>
                <span class="details-grid__label">"Author"</span>
                <span>{item.author.clone()}</span>
                <span class="details-grid__label">"Created"</span>
                <span>{format_date(&item.created_at)}</span>
                <span class="details-grid__label">"Updated"</span>
                <span>{format_date(&item.updated_at)}</span>
                <span class="details-grid__label">"Views"</span>
                <span>{format_thousands(i64::from(item.views))}</span>
                <span class="details-grid__label">"Category"</span>
                <span>{item.category.clone().unwrap_or_else(|| "—".to_string())}</span>
                {item.scheduled_date.clone().map(|date| view! {
                    <span class="details-grid__label">"Scheduled for"</span>
                    <span>{format_date(&date)}</span>
                })}
            </div>
            {(!item.tags.is_empty()).then(|| view! {
                <div class="tag-list">
                    {item.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                </div>
            })}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=run(on_open)>
                    {icon("eye")}
                    "Open"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=run(on_download)>
                    {icon("download")}
                    "Download"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=run(on_edit)>
                    {icon("edit")}
                    "Edit"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=run(on_delete)>
                    {icon("trash")}
                    "Delete"
                </Button>
            </div>
        </ModalFrame>
    }
}
