use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::settings::AppSettings;
use crate::shared::toast::{NotificationCenter, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared stores for the whole app, provided via context.
    provide_context(AppGlobalContext::new());
    provide_context(AppSettings::new());

    // Toasts: one queue for every page
    provide_context(NotificationCenter::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
