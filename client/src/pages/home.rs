//! Home composite: hero, features, how it works, use cases, pricing, FAQ.
//!
//! Section ids (`features`, `how-it-works`, `pricing`, `faq`) are the
//! targets of the header's `/#...` links.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    blurb: &'static str,
    href: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Discovery engine",
        blurb: "Find the listeners most likely to become fans.",
        href: "/features/discovery-engine",
    },
    Feature {
        title: "Analytics dashboard",
        blurb: "Every platform, list and campaign in one view.",
        href: "/features/analytics-dashboard",
    },
    Feature {
        title: "Geofencing & segmentation",
        blurb: "Target fans by place, taste and engagement.",
        href: "/features/geofencing-segmentation",
    },
    Feature {
        title: "Campaign orchestration",
        blurb: "Release and tour journeys that run themselves.",
        href: "/features/campaign-orchestration",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Connect", "Link Spotify, Instagram, TikTok and YouTube in a few clicks."),
    ("Capture", "Share one capture link and collect fans with consent."),
    ("Reach", "Send email and SMS campaigns to the segments that matter."),
];

const AUDIENCES: &[(&str, &str, &str)] = &[
    ("Artists", "Own your audience and announce on your terms.", "/artists"),
    ("Labels", "One workspace for the whole roster.", "/labels"),
    ("Promoters", "Fill rooms with fans who already listen.", "/promoters"),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    summary: &'static str,
    perks: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0",
        summary: "For artists building a first list.",
        perks: &["1,000 contacts", "2 capture links", "Email campaigns"],
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$49",
        summary: "For working artists and managers.",
        perks: &["25,000 contacts", "Unlimited capture links", "Email and SMS", "Geofenced segments"],
        featured: true,
    },
    Plan {
        name: "Label",
        price: "Custom",
        summary: "For rosters, agencies and promoters.",
        perks: &["Multiple artists", "Team roles", "Priority support"],
        featured: false,
    },
];

const FAQ: &[(&str, &str)] = &[
    (
        "Who owns the fan data?",
        "You do. Export your contacts at any time, and we never sell them.",
    ),
    (
        "Do fans have to opt in?",
        "Yes. Capture links record email and SMS consent separately for every contact.",
    ),
    (
        "Which platforms can I connect?",
        "Spotify, Instagram, TikTok and YouTube today, with more on the integrations page.",
    ),
    (
        "Can I cancel anytime?",
        "Plans are month to month. Downgrade or cancel from settings whenever you like.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <p class="eyebrow">"Music marketing"</p>
                <h1>"Find your fans. Keep them."</h1>
                <p class="hero__lede">
                    "Wreckshop turns streams and follows into a fan list you own, then helps you reach it when it counts."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/sign-up">"Start free"</a>
                    <a class="btn" href="/#how-it-works">"See how it works"</a>
                </div>
            </section>

            <section id="features" class="home__section">
                <h2>"Everything between the stream and the sold-out show"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <a class="feature-card" href=f.href>
                                <h3>{f.title}</h3>
                                <p>{f.blurb}</p>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="home__section">
                <h2>"How it works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(title, body)| view! {
                            <li class="steps__item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="home__section">
                <h2>"Built for the whole scene"</h2>
                <div class="audience-grid">
                    {AUDIENCES
                        .iter()
                        .map(|(title, body, href)| view! {
                            <a class="audience-card" href=*href>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__section home__privacy">
                <h2>"Consent first"</h2>
                <p>
                    "Every contact carries its own email and SMS consent. Opt-outs apply instantly. Read the "
                    <a href="/privacy-policy">"privacy policy"</a>
                    " or the "
                    <a href="/security">"security overview"</a>
                    "."
                </p>
            </section>

            <section id="pricing" class="home__section">
                <h2>"Pricing"</h2>
                <div class="pricing-grid">
                    {PLANS
                        .iter()
                        .map(|plan| view! {
                            <div class="pricing-card" class:pricing-card--featured=plan.featured>
                                <h3>{plan.name}</h3>
                                <p class="pricing-card__price">{plan.price}</p>
                                <p>{plan.summary}</p>
                                <ul>
                                    {plan.perks.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                </ul>
                                <a class="btn btn--primary" href="/sign-up">"Choose "{plan.name}</a>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="faq" class="home__section">
                <h2>"Questions"</h2>
                {FAQ
                    .iter()
                    .map(|(q, a)| view! {
                        <details class="faq__item">
                            <summary>{*q}</summary>
                            <p>{*a}</p>
                        </details>
                    })
                    .collect_view()}
            </section>

            <section class="home__cta">
                <h2>"Your next release deserves a list."</h2>
                <a class="btn btn--primary" href="/sign-up">"Create your workspace"</a>
                <a class="btn" href="/contact">"Talk to us"</a>
            </section>
        </div>
    }
}
