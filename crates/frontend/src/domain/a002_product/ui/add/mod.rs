use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::domain::a002_product::{Product, ProductCategory, ProductDraft, ProductStatus};
use leptos::prelude::*;
use thaw::*;

/// "Add New Product". `next_id` is the id the new product will get.
#[component]
pub fn AddProductModal(
    next_id: u32,
    on_close: Callback<()>,
    on_created: Callback<Product>,
) -> impl IntoView {
    let toasts = use_notifications();
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(ProductCategory::Subscription.as_str().to_string());
    let status = RwSignal::new(ProductStatus::Active.as_str().to_string());
    let price = RwSignal::new(String::new());

    let submit = move |_| {
        let draft = ProductDraft {
            name: name.get_untracked(),
            category: ProductCategory::parse(&category.get_untracked())
                .unwrap_or(ProductCategory::Subscription),
            status: ProductStatus::parse(&status.get_untracked()).unwrap_or(ProductStatus::Active),
            price: price.get_untracked(),
        };
        match draft.build(next_id) {
            Ok(product) => on_created.run(product),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Add New Product" on_close=on_close>
            <div class="form__group">
                <Label>"Product Name"</Label>
                <Input value=name placeholder="e.g., Team Plan" />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Category"</Label>
                    <Select value=category>
                        {ProductCategory::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        {ProductStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>
            <div class="form__group">
                <Label>"Price"</Label>
                <Input value=price placeholder="$29/month" />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create Product"
                </Button>
            </div>
        </ModalFrame>
    }
}
