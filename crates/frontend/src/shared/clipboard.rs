//! Clipboard helper over the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copies text and reports the outcome through the callback.
///
/// # Example
/// ```ignore
/// copy_to_clipboard(&key, move |result| match result {
///     Ok(()) => toasts.success("API key copied to clipboard"),
///     Err(e) => toasts.error(e),
/// });
/// ```
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(Err("Clipboard is not available".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| format!("Copy failed: {:?}", e));
        on_done(result);
    });
}
