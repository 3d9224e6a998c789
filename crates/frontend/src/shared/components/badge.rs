use leptos::prelude::*;

/// Цветовой тон бейджа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "badge badge--success",
            Tone::Warning => "badge badge--warning",
            Tone::Error => "badge badge--error",
            Tone::Info => "badge badge--primary",
            Tone::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn ToneBadge(tone: Tone, #[prop(into)] text: String) -> impl IntoView {
    view! { <span class=tone.class()>{text}</span> }
}
