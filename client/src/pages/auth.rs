//! Sign-in and sign-up forms.
//!
//! Accounts live in the Wreckshop app; these pages collect an email and
//! point visitors onward.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Returns an error message for an obviously unusable email.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') && !domain.ends_with('.') => {
            Ok(email.to_owned())
        }
        _ => Err("That doesn't look like an email address."),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <AuthForm
            title="Welcome back"
            submit_label="Email me a sign-in link"
            confirmation="If an account exists for that address, a sign-in link is on its way."
            alternate_prompt="New to Wreckshop?"
            alternate_label="Create an account"
            alternate_href="/sign-up"
        />
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthForm
            title="Create your workspace"
            submit_label="Join the beta"
            confirmation="You're on the list. We'll email you when your workspace is ready."
            alternate_prompt="Already have an account?"
            alternate_label="Sign in"
            alternate_href="/sign-in"
        />
    }
}

#[component]
fn AuthForm(
    title: &'static str,
    submit_label: &'static str,
    confirmation: &'static str,
    alternate_prompt: &'static str,
    alternate_label: &'static str,
    alternate_href: &'static str,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(_) => {
                done.set(true);
                info.set(confirmation.to_owned());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{title}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || done.get()>
                        {submit_label}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alternate">
                    {alternate_prompt}" "<a href=alternate_href>{alternate_label}</a>
                </p>
            </div>
        </div>
    }
}
