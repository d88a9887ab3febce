//! Modal for generating a capture link.

use leptos::prelude::*;

use crate::net::types::CreatedCaptureLink;
use crate::state::forms::CaptureLinkForm;
use crate::state::toast::ToastState;

/// "Create capture link" dialog.
///
/// On success the new URL is copied to the clipboard (best effort), a toast
/// announces it, `on_created` fires and the dialog closes. Failures toast
/// and keep the inputs. Closing is ignored while the request is in flight.
#[component]
pub fn CreateCaptureLinkModal(on_close: Callback<()>, on_created: Callback<CreatedCaptureLink>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(CaptureLinkForm::default());

    let request_close = move || {
        if form.get_untracked().can_close() {
            form.update(CaptureLinkForm::reset);
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
        let Some(request) = form.try_update(CaptureLinkForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use super::toaster::notify;
            use crate::state::toast::ToastKind;

            let result = crate::net::api::browser_client().create_capture_link(&request).await;
            match form.try_update(|f| f.finish(result)) {
                Some(Ok(created)) => {
                    crate::util::clipboard::copy_text(&created.url);
                    notify(toasts, ToastKind::Success, "Capture link created", Some(&created.url));
                    on_created.run(created);
                    on_close.run(());
                }
                Some(Err(e)) => {
                    log::warn!("create capture link failed: {e}");
                    notify(toasts, ToastKind::Error, "Failed to create capture link", Some(&e.to_string()));
                }
                None => {}
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts, on_created);
        }
    };

    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           get: fn(&CaptureLinkForm) -> String,
                           set: fn(&mut CaptureLinkForm, String)| {
        view! {
            <label class="dialog__field">
                <span>{label}</span>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| request_close()>
            <div
                class="dialog dialog--capture-link"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Create capture link"</h2>
                <p class="dialog__description">"Customize title, channels, and optional redirect."</p>
                <form class="dialog__form" on:submit=on_submit>
                    {text_field("Title", "Join the list", |f| f.title.clone(), |f, v| f.title = v)}
                    {text_field(
                        "Description",
                        "Get updates by email and/or SMS.",
                        |f| f.description.clone(),
                        |f, v| f.description = v,
                    )}
                    <div class="dialog__checks">
                        <span>"Allowed channels"</span>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().allow_email
                                on:change=move |ev| form.update(|f| f.allow_email = event_target_checked(&ev))
                            />
                            "Email"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().allow_sms
                                on:change=move |ev| form.update(|f| f.allow_sms = event_target_checked(&ev))
                            />
                            "SMS"
                        </label>
                    </div>
                    {text_field(
                        "Redirect URL (optional)",
                        "https://yoursite.com/thanks",
                        |f| f.redirect_url.clone(),
                        |f, v| f.redirect_url = v,
                    )}
                    {text_field(
                        "Tags (comma-separated)",
                        "houston, presave, vip",
                        |f| f.tags.clone(),
                        |f, v| f.tags = v,
                    )}
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
                            {move || if form.get().submitting { "Creating…" } else { "Create link" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
