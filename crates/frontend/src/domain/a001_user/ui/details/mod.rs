use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_date;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_user::User;
use leptos::prelude::*;

use super::list::status_tone;

#[component]
pub fn UserDetails(user: User, on_close: Callback<()>) -> impl IntoView {
    let joined = user
        .joined_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "Pending invitation".to_string());

    view! {
        <ModalFrame title="User Details" on_close=on_close>
            <div class="details-grid">
                <div class="details-grid__item">
                    <span class="details-grid__label">"Name"</span>
                    <span class="details-grid__value">{user.name.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <span class="details-grid__label">"Email"</span>
                    <span class="details-grid__value">{user.email.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <span class="details-grid__label">"Role"</span>
                    <span class="details-grid__value">{user.role.as_str()}</span>
                </div>
                <div class="details-grid__item">
                    <span class="details-grid__label">"Status"</span>
                    <ToneBadge tone=status_tone(user.status) text=user.status.as_str() />
                </div>
                <div class="details-grid__item">
                    <span class="details-grid__label">"Department"</span>
                    <span class="details-grid__value">
                        {user.department.clone().unwrap_or_else(|| "—".to_string())}
                    </span>
                </div>
                <div class="details-grid__item">
                    <span class="details-grid__label">"Joined Date"</span>
                    <span class="details-grid__value">{joined}</span>
                </div>
                <div class="details-grid__item details-grid__item--wide">
                    <span class="details-grid__label">"Permissions"</span>
                    <div class="tag-list">
                        {if user.permissions.is_empty() {
                            view! { <span class="details-grid__value">"None"</span> }.into_any()
                        } else {
                            user.permissions
                                .iter()
                                .map(|p| view! { <span class="tag">{p.clone()}</span> })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
