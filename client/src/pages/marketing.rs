//! Single-template marketing page.

use leptos::prelude::*;

use super::content::PageContent;

#[component]
pub fn MarketingPage(content: &'static PageContent) -> impl IntoView {
    let sections = content
        .sections
        .iter()
        .map(|section| {
            let bullets = (!section.bullets.is_empty()).then(|| {
                view! {
                    <ul class="marketing-page__bullets">
                        {section.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                    </ul>
                }
            });
            view! {
                <section class="marketing-page__section">
                    <h2>{section.heading}</h2>
                    <p>{section.body}</p>
                    {bullets}
                </section>
            }
        })
        .collect_view();

    view! {
        <article class="marketing-page">
            <header class="marketing-page__header">
                <p class="eyebrow">{content.eyebrow}</p>
                <h1>{content.title}</h1>
                <p class="marketing-page__intro">{content.intro}</p>
            </header>
            {sections}
            {content.cta.map(|cta| view! {
                <div class="marketing-page__cta">
                    <a class="btn btn--primary" href=cta.href>{cta.label}</a>
                </div>
            })}
        </article>
    }
}
