//! Top navigation bar with the theme toggle.

use leptos::prelude::*;

use crate::util::theme::{self, Theme};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "/#features"),
    ("How it works", "/#how-it-works"),
    ("Pricing", "/#pricing"),
    ("Artists", "/artists"),
    ("Labels", "/labels"),
    ("Promoters", "/promoters"),
    ("Integrations", "/integrations"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let menu_open = RwSignal::new(false);

    let on_toggle_theme = move |_| current.update(|t| *t = theme::toggle(*t));

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Wreckshop"</a>
            <button
                class="site-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <a href=*href on:click=move |_| menu_open.set(false)>{*label}</a>
                    })
                    .collect_view()}
            </nav>
            <div class="site-header__actions">
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    on:click=on_toggle_theme
                >
                    {move || if current.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>
                <a class="btn btn--ghost" href="/sign-in">"Sign in"</a>
                <a class="btn btn--primary" href="/sign-up">"Get started"</a>
            </div>
        </header>
    }
}
