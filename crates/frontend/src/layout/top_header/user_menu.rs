use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_notifications;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Avatar button with the account dropdown.
#[component]
pub fn UserMenu() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let navigate = use_navigate();

    let is_open = ctx.user_menu_open;
    let user = ctx.current_user;

    let toggle = move |e: ev::MouseEvent| {
        e.stop_propagation();
        ctx.toggle_user_menu();
    };

    let logout = move |_| {
        ctx.close_user_menu();
        log::info!("user logged out");
        toasts.success("Logged out successfully");
        navigate("/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="user-menu">
            <button class="user-menu__trigger" on:click=toggle title="Account">
                <span class="user-menu__avatar">{move || user.get().initials()}</span>
                <span class="user-menu__name">{move || user.get().name}</span>
                {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </button>

            <Show when=move || is_open.get()>
                <div class="user-menu__dropdown" on:click=move |_| ctx.close_user_menu()>
                    <div class="user-menu__header">
                        <div class="user-menu__header-name">{move || user.get().name}</div>
                        <div class="user-menu__header-email">{move || user.get().email}</div>
                    </div>
                    <A href="/settings" attr:class="user-menu__item">
                        {icon("settings")}
                        <span>"Settings"</span>
                    </A>
                    <A href="/profile" attr:class="user-menu__item">
                        {icon("user")}
                        <span>"Profile"</span>
                    </A>
                    <A href="/account" attr:class="user-menu__item">
                        {icon("credit-card")}
                        <span>"Account"</span>
                    </A>
                    <button class="user-menu__item user-menu__item--danger" on:click=logout.clone()>
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
