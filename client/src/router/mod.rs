//! Client-side router for the marketing site and dashboard fragments.
//!
//! ARCHITECTURE
//! ============
//! - `intercept`: pure click -> `NavAction` rules.
//! - `scroll`: token-guarded deferred fragment scrolling.
//! - `navigation`: `Navigator` state machine over a `NavigationHost`.
//! - `routes`: exact-match path table.
//! - `browser`: `web-sys` host and listener lifecycle (hydrate only).
//!
//! `SiteRouter` ties them together: it owns the `NavigationState` signal and
//! renders whatever page `routes::resolve` picks for the current path.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod intercept;
pub mod navigation;
pub mod routes;
pub mod scroll;

use leptos::prelude::*;
use leptos_meta::Title;

use self::navigation::NavigationState;

/// Page outlet driven by the current pathname.
///
/// Provides `RwSignal<NavigationState>` via context. In the browser it
/// attaches the document-level click listener and the popstate listener on
/// mount and removes them on cleanup.
#[component]
pub fn SiteRouter() -> impl IntoView {
    let nav = RwSignal::new(NavigationState::new(initial_path()));
    provide_context(nav);

    #[cfg(feature = "hydrate")]
    {
        browser::attach(nav);
        on_cleanup(browser::detach);
    }

    let page = Memo::new(move |_| routes::resolve(&nav.get().current_path));

    view! {
        <Title text=move || format!("{} | Wreckshop", page.get().title())/>
        {move || crate::pages::render(page.get())}
    }
}

/// Pathname the first render should use.
fn initial_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        use_context::<http::request::Parts>().map_or_else(|| "/".to_owned(), |parts| parts.uri.path().to_owned())
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        "/".to_owned()
    }
}
