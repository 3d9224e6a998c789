use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::domain::a006_custom_field::{CustomField, CustomFieldDraft, FieldCategory, FieldType};
use contracts::shared::validation::slugify_field_name;
use leptos::prelude::*;
use thaw::*;

/// Конструктор поля. Имя нормализуется при вводе, проверка при сохранении.
#[component]
pub fn FieldBuilderModal(
    next_id: u32,
    created_at: String,
    on_close: Callback<()>,
    on_create: Callback<CustomField>,
) -> impl IntoView {
    let toasts = use_notifications();
    let draft = RwSignal::new(CustomFieldDraft::default());

    let name = RwSignal::new(String::new());
    let label = RwSignal::new(String::new());
    let field_type = RwSignal::new(FieldType::Text.as_str().to_string());
    let category = RwSignal::new(FieldCategory::Custom.as_str().to_string());
    let default_value = RwSignal::new(String::new());
    let required = RwSignal::new(false);
    let new_option = RwSignal::new(String::new());

    // slug while typing
    Effect::new(move |_| {
        let raw = name.get();
        let slug = slugify_field_name(&raw);
        if slug != raw {
            name.set(slug);
        }
    });

    let is_select = move || FieldType::parse(&field_type.get()) == Some(FieldType::Select);

    let add_option = move |_| {
        let value = new_option.get_untracked();
        let mut result = Ok(());
        draft.update(|d| result = d.add_option(&value));
        match result {
            Ok(()) => new_option.set(String::new()),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    let submit = move |_| {
        let mut current = draft.get_untracked();
        current.name = name.get_untracked();
        current.label = label.get_untracked();
        current.field_type = FieldType::parse(&field_type.get_untracked());
        current.category = FieldCategory::parse(&category.get_untracked());
        current.default_value = default_value.get_untracked();
        current.required = required.get_untracked();

        match current.build(next_id, &created_at) {
            Ok(field) => on_create.run(field),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Create Custom Field" on_close=on_close>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Field Name *"</Label>
                    <Input value=name placeholder="field_name" />
                    <p class="form__hint">"Lowercase letters, digits and underscores"</p>
                </div>
                <div class="form__group">
                    <Label>"Display Label *"</Label>
                    <Input value=label placeholder="Field Label" />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Field Type"</Label>
                    <Select value=field_type>
                        {FieldType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{format!("{} {}", t.icon(), t.as_str())}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Category"</Label>
                    <Select value=category>
                        {FieldCategory::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>

            <Show when=is_select>
                <div class="form__group">
                    <Label>"Options *"</Label>
                    <ul class="option-list">
                        {move || draft.with(|d| d.options.clone()).into_iter().enumerate().map(|(idx, option)| view! {
                            <li class="option-list__item">
                                <span>{option}</span>
                                <button
                                    class="option-list__remove"
                                    title="Remove"
                                    on:click=move |_| draft.update(|d| d.remove_option(idx))
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="option-list__add">
                        <Input value=new_option placeholder="Option value" />
                        <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small on_click=add_option>
                            {icon("plus")}
                            "Add Option"
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="form__group">
                <Label>"Default Value"</Label>
                <Input value=default_value placeholder="Enter default value" />
            </div>
            <Checkbox checked=required label="Required field" />

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create Field"
                </Button>
            </div>
        </ModalFrame>
    }
}
