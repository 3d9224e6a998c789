//! Имитация длительных операций (импорт, загрузка) с индикатором прогресса.

use super::config::{PROGRESS_STEP, PROGRESS_TICK_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Next progress value, capped at 100.
pub fn next_progress(current: u32, step: u32) -> u32 {
    current.saturating_add(step).min(100)
}

/// Drives `progress` from 0 to 100 and then calls `on_done`.
///
/// `progress` is `None` while idle. Stops silently if the owning page has
/// been unmounted.
pub fn simulate_progress<F>(label: &'static str, progress: RwSignal<Option<u32>>, on_done: F)
where
    F: FnOnce() + 'static,
{
    log::info!("{label}: started");
    progress.set(Some(0));

    spawn_local(async move {
        let mut current = 0;
        while current < 100 {
            TimeoutFuture::new(PROGRESS_TICK_MS).await;
            current = next_progress(current, PROGRESS_STEP);
            if progress.try_set(Some(current)).is_some() {
                log::debug!("{label}: abandoned at {current}%");
                return;
            }
        }
        progress.set(None);
        log::info!("{label}: finished");
        on_done();
    });
}

/// Horizontal bar for a running simulation.
#[component]
pub fn SimulatedProgress(
    #[prop(into)]
    label: String,
    #[prop(into)]
    progress: Signal<Option<u32>>,
) -> impl IntoView {
    view! {
        <Show when=move || progress.get().is_some()>
            <div class="progress">
                <div class="progress__header">
                    <span>{label.clone()}</span>
                    <span>{move || format!("{}%", progress.get().unwrap_or(0))}</span>
                </div>
                <div class="progress__track">
                    <div
                        class="progress__fill"
                        style:width=move || format!("{}%", progress.get().unwrap_or(0))
                    />
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_progress_caps_at_100() {
        assert_eq!(next_progress(0, 10), 10);
        assert_eq!(next_progress(95, 10), 100);
        assert_eq!(next_progress(100, 10), 100);
        assert_eq!(next_progress(u32::MAX, 1), 100);
    }
}
