use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div
            data-zone="center"
            class="app-content"
            class:app-content--wide=move || !ctx.left_open.get()
            // clicking anywhere in the page closes the user menu
            on:click=move |_| ctx.close_user_menu()
        >
            {children()}
        </div>
    }
}
