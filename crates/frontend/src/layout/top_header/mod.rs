//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and page title
//! - "Live" indicator driven by the real-time setting
//! - Notifications bell with unread badge
//! - User menu

pub mod user_menu;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use leptos::prelude::*;
use leptos_router::components::A;
use user_menu::UserMenu;

/// Badge text for the bell, capped at `9+`.
pub fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let settings = use_settings();
    let unread = ctx.unread_count();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || settings.workspace_name.get()}</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || settings.realtime.get()>
                    <span class="top-header__live">
                        <span class="top-header__live-dot"></span>
                        "Live"
                    </span>
                </Show>

                <A href="/notifications" attr:class="top-header__icon-btn top-header__bell" attr:title="Notifications">
                    {icon("bell")}
                    {move || unread_badge(unread.get()).map(|text| view! {
                        <span class="top-header__badge">{text}</span>
                    })}
                </A>

                <A href="/settings" attr:class="top-header__icon-btn" attr:title="Settings">
                    {icon("settings")}
                </A>

                <UserMenu />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_badge_caps_at_nine() {
        assert_eq!(unread_badge(0), None);
        assert_eq!(unread_badge(4).as_deref(), Some("4"));
        assert_eq!(unread_badge(9).as_deref(), Some("9"));
        assert_eq!(unread_badge(12).as_deref(), Some("9+"));
    }
}
