//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `render` is the view factory the site router calls with the resolved
//! `Page`. Most marketing pages share `MarketingPage` and differ only in the
//! static copy from `content`; home, auth and the audience dashboard have
//! their own layouts.

pub mod audience;
pub mod auth;
pub mod content;
pub mod home;
pub mod marketing;

use leptos::prelude::*;

use crate::router::routes::Page;

use self::audience::AudienceContactsPage;
use self::auth::{SignInPage, SignUpPage};
use self::home::HomePage;
use self::marketing::MarketingPage;

/// Build the view for `page`.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::SignIn => view! { <SignInPage/> }.into_any(),
        Page::SignUp => view! { <SignUpPage/> }.into_any(),
        Page::AudienceContacts => view! { <AudienceContactsPage/> }.into_any(),
        other => match content::content_for(other) {
            Some(content) => view! { <MarketingPage content=content/> }.into_any(),
            None => view! { <HomePage/> }.into_any(),
        },
    }
}
