use super::center::use_notifications;
use contracts::shared::notifications::Notification;
use leptos::prelude::*;

/// Стек уведомлений в правом нижнем углу.
#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || center.items().get()
                key=|n: &Notification| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div
                            id=id.to_string()
                            class=format!("toast toast--{}", n.kind.as_str())
                        >
                            <span class="toast__icon">{n.kind.icon()}</span>
                            <span class="toast__message">{n.message.clone()}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| center.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
