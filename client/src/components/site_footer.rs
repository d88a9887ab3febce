//! Footer link columns and the cookie-settings control.

use leptos::prelude::*;

use crate::state::consent::{self, ConsentState};

const COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Product",
        &[
            ("Discovery engine", "/features/discovery-engine"),
            ("Analytics dashboard", "/features/analytics-dashboard"),
            ("Geofencing & segmentation", "/features/geofencing-segmentation"),
            ("Campaign orchestration", "/features/campaign-orchestration"),
            ("Integrations", "/integrations"),
            ("Pricing", "/#pricing"),
        ],
    ),
    (
        "Solutions",
        &[("Artists", "/artists"), ("Labels", "/labels"), ("Promoters", "/promoters")],
    ),
    (
        "Resources",
        &[
            ("Blog", "/blog"),
            ("Case studies", "/case-studies"),
            ("Documentation", "/documentation"),
            ("Community", "/community"),
            ("Academy", "/academy"),
            ("Status", "/status"),
        ],
    ),
    (
        "Company",
        &[("About", "/about"), ("Careers", "/careers"), ("Contact", "/contact"), ("Security", "/security")],
    ),
    (
        "Legal",
        &[
            ("Privacy policy", "/privacy-policy"),
            ("Terms of service", "/terms-of-service"),
            ("Cookie policy", "/cookie-policy"),
            ("Do not sell my info", "/do-not-sell"),
        ],
    ),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let consent_state = expect_context::<RwSignal<ConsentState>>();

    let on_cookie_settings = move |_| {
        consent::clear();
        consent_state.update(ConsentState::reopen);
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                {COLUMNS
                    .iter()
                    .map(|(heading, links)| view! {
                        <div class="site-footer__column">
                            <h4>{*heading}</h4>
                            <ul>
                                {links
                                    .iter()
                                    .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="site-footer__bottom">
                <span>"© Wreckshop"</span>
                <button class="site-footer__cookie-settings" on:click=on_cookie_settings>
                    "Cookie settings"
                </button>
            </div>
        </footer>
    }
}
