//! Modal for adding an audience contact by hand.

use leptos::prelude::*;

use crate::net::types::Contact;
use crate::state::forms::ContactForm;

/// "Add audience contact" dialog.
///
/// Closing (backdrop, Escape, Cancel) is ignored while the request is in
/// flight. On success the form resets, `on_created` fires and the dialog
/// closes; on failure the error shows inline and the inputs stay.
#[component]
pub fn CreateContactModal(on_close: Callback<()>, on_created: Callback<Contact>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let request_close = move || {
        if form.get_untracked().can_close() {
            form.update(ContactForm::reset);
            on_close.run(());
        }
    };
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            request_close();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::browser_client().create_contact(&request).await;
            if let Err(e) = &result {
                log::warn!("create contact failed: {e}");
            }
            if let Some(contact) = form.try_update(|f| f.finish(result)).flatten() {
                on_created.run(contact);
                on_close.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, on_created);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| request_close()>
            <div
                class="dialog dialog--contact"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Add Audience Contact"</h2>
                <p class="dialog__description">
                    "Store an email/phone with consent flags to reach fans via owned channels."
                </p>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__field">
                        <span>"Display name"</span>
                        <input
                            type="text"
                            placeholder="e.g., Sarah Johnson"
                            prop:value=move || form.get().display_name
                            on:input=move |ev| form.update(|f| f.display_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="email@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span>"Phone"</span>
                        <input
                            type="tel"
                            placeholder="+1 555 123 4567"
                            prop:value=move || form.get().phone
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__checks">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().consent_email
                                on:change=move |ev| form.update(|f| f.consent_email = event_target_checked(&ev))
                            />
                            "Email consent"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().consent_sms
                                on:change=move |ev| form.update(|f| f.consent_sms = event_target_checked(&ev))
                            />
                            "SMS consent"
                        </label>
                    </div>
                    <Show when=move || form.get().error.is_some()>
                        <p class="dialog__error">{move || form.get().error.unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn btn--ghost"
                            disabled=move || form.get().submitting
                            on:click=move |_| request_close()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || form.get().submitting>
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
