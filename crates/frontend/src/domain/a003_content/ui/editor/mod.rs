use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a003_content::{ContentDraft, ContentItem, ContentStatus, ContentType, SaveAction};
use leptos::prelude::*;
use thaw::*;

/// Редактор материала: создание (`existing = None`) или правка.
///
/// Проверку формы выполняет страница, получив черновик в `on_save`.
#[component]
pub fn ContentEditorModal(
    existing: Option<ContentItem>,
    on_close: Callback<()>,
    on_save: Callback<(ContentDraft, SaveAction)>,
) -> impl IntoView {
    let initial = existing
        .as_ref()
        .map(ContentDraft::from_item)
        .unwrap_or_default();
    let title_text = if existing.is_some() { "Edit Content" } else { "Create New Content" };

    let title = RwSignal::new(initial.title);
    let content_type = RwSignal::new(initial.content_type.as_str().to_string());
    let body = RwSignal::new(initial.body);
    let category = RwSignal::new(initial.category);
    let tags = RwSignal::new(initial.tags);
    let status = RwSignal::new(initial.status.as_str().to_string());
    let scheduled_date = RwSignal::new(initial.scheduled_date);

    let collect = move || ContentDraft {
        title: title.get_untracked(),
        content_type: ContentType::parse(&content_type.get_untracked()).unwrap_or(ContentType::Article),
        body: body.get_untracked(),
        category: category.get_untracked(),
        tags: tags.get_untracked(),
        status: ContentStatus::parse(&status.get_untracked()).unwrap_or(ContentStatus::Draft),
        scheduled_date: scheduled_date.get_untracked(),
    };

    view! {
        <ModalFrame title=title_text on_close=on_close modal_class="modal--wide">
            <div class="form__row">
                <div class="form__group">
                    <Label>"Title *"</Label>
                    <Input value=title placeholder="Enter content title" />
                </div>
                <div class="form__group">
                    <Label>"Type"</Label>
                    <Select value=content_type>
                        {ContentType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>
            <div class="form__group">
                <Label>"Content"</Label>
                <Textarea value=body placeholder="Write your content here..." attr:rows=8 />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Category"</Label>
                    <Input value=category placeholder="Enter category" />
                </div>
                <div class="form__group">
                    <Label>"Tags"</Label>
                    <Input value=tags placeholder="tag1, tag2, tag3" />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        {ContentStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Schedule Date (optional)"</Label>
                    <Input value=scheduled_date input_type=InputType::Date />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_save.run((collect(), SaveAction::Draft))
                >
                    "Save as Draft"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run((collect(), SaveAction::Publish))
                >
                    "Publish"
                </Button>
            </div>
        </ModalFrame>
    }
}
