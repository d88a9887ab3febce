//! Best-effort clipboard writes.
//!
//! Copying a generated link is a convenience; failures (no permission,
//! insecure context, SSR) are swallowed.

/// Write `text` to the system clipboard. Returns `false` when the clipboard
/// API is unavailable; a rejected write after that point is not reported.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(clipboard) = window.navigator().clipboard() else {
            return false;
        };
        let promise = clipboard.write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("clipboard write rejected: {e:?}");
            }
        });
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Absolute URL for a same-origin path, for copying and sharing.
pub fn absolute_url(path: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        format!("{origin}{path}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        path.to_owned()
    }
}
