//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::components::cookie_consent::CookieConsentBanner;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::toaster::Toaster;
use crate::router::SiteRouter;
use crate::state::consent::ConsentState;
use crate::state::toast::ToastState;
use crate::util::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast, cookie-consent and theme contexts shared by the
/// header, footer and pages, then hands the main area to `SiteRouter`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let consent = RwSignal::new(ConsentState::default());
    let theme = RwSignal::new(Theme::default());

    provide_context(toasts);
    provide_context(consent);
    provide_context(theme);

    // Stored theme is applied after hydration so the first client render
    // matches the server markup.
    Effect::new(move |_| {
        let stored = crate::util::theme::read_preference();
        crate::util::theme::apply(stored);
        theme.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wreckshop.css"/>

        <SiteHeader/>
        <main class="site-main">
            <SiteRouter/>
        </main>
        <SiteFooter/>
        <CookieConsentBanner/>
        <Toaster/>
    }
}
