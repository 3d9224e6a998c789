//! CardAnimated — Thaw `Card` with the `card-appear` entrance animation.
//!
//! ```ignore
//! <CardAnimated title="Recent activity" delay_ms=80>
//!     <ul>...</ul>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Optional heading rendered above the content.
    #[prop(optional, into)]
    title: Option<String>,
    /// Animation delay for a staggered appearance, ms.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
            {children()}
        </Card>
    }
}
