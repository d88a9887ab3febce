//! Cookie-consent banner with an optional preference panel.

use leptos::prelude::*;

use crate::state::consent::{self, ConsentState, CookieCategory, CookiePreferences};

#[component]
pub fn CookieConsentBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<ConsentState>>();

    #[cfg(feature = "hydrate")]
    {
        state.set(ConsentState::from_stored(consent::load()));
        if state.get_untracked().needs_prompt() {
            gloo_timers::callback::Timeout::new(consent::BANNER_DELAY_MS, move || {
                state.try_update(|s| {
                    if s.needs_prompt() {
                        s.visible = true;
                    }
                });
            })
            .forget();
        }
    }

    let persist = move |prefs: CookiePreferences| {
        consent::save(&prefs);
        #[cfg(feature = "hydrate")]
        log::info!(
            "cookie preferences saved: analytics={} marketing={} functional={}",
            prefs.analytics,
            prefs.marketing,
            prefs.functional
        );
    };
    let on_accept_all = move |_| persist(state.try_update(ConsentState::accept_all).unwrap_or_default());
    let on_necessary = move |_| persist(state.try_update(ConsentState::accept_necessary).unwrap_or_default());
    let on_save = move |_| persist(state.try_update(ConsentState::save).unwrap_or_default());
    let on_customize = move |_| state.update(|s| s.customizing = !s.customizing);
    let on_dismiss = move |_| state.update(|s| s.visible = false);

    let toggle_row = move |category: CookieCategory, label: &'static str, detail: &'static str| {
        let checked = move || {
            let prefs = state.get().preferences;
            match category {
                CookieCategory::Analytics => prefs.analytics,
                CookieCategory::Marketing => prefs.marketing,
                CookieCategory::Functional => prefs.functional,
            }
        };
        view! {
            <label class="cookie-banner__option">
                <div>
                    <p class="cookie-banner__option-title">{label}</p>
                    <p class="cookie-banner__option-detail">{detail}</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |_| state.update(|s| s.toggle(category))
                />
            </label>
        }
    };

    view! {
        <Show when=move || state.get().visible>
            <div class="cookie-banner" role="dialog" aria-label="Cookie consent">
                <div class="cookie-banner__content">
                    <h3>"We value your privacy"</h3>
                    <p>
                        "We use cookies to enhance your experience, analyze site traffic, and personalize content. You can accept all cookies, keep only the necessary ones, or customize your preferences."
                    </p>
                    <div class="cookie-banner__actions">
                        <button class="btn btn--primary" on:click=on_accept_all>"Accept all cookies"</button>
                        <button class="btn" on:click=on_necessary>"Necessary only"</button>
                        <button class="btn btn--ghost" on:click=on_customize>"Customize"</button>
                        <a class="cookie-banner__policy" href="/cookie-policy">"Cookie policy"</a>
                    </div>
                    <Show when=move || state.get().customizing>
                        <div class="cookie-banner__preferences">
                            <h4>"Cookie preferences"</h4>
                            <label class="cookie-banner__option">
                                <div>
                                    <p class="cookie-banner__option-title">"Necessary cookies"</p>
                                    <p class="cookie-banner__option-detail">"Required for basic site functionality."</p>
                                </div>
                                <input type="checkbox" checked disabled/>
                            </label>
                            {toggle_row(
                                CookieCategory::Analytics,
                                "Analytics cookies",
                                "Help us understand how you use the site so we can improve it.",
                            )}
                            {toggle_row(
                                CookieCategory::Marketing,
                                "Marketing cookies",
                                "Used to personalize ads and measure campaigns.",
                            )}
                            {toggle_row(
                                CookieCategory::Functional,
                                "Functional cookies",
                                "Enable chat, video, and other enhanced features.",
                            )}
                            <button class="btn btn--primary cookie-banner__save" on:click=on_save>
                                "Save preferences"
                            </button>
                        </div>
                    </Show>
                </div>
                <button class="cookie-banner__dismiss" aria-label="Dismiss cookie banner" on:click=on_dismiss>
                    "×"
                </button>
            </div>
        </Show>
    }
}
