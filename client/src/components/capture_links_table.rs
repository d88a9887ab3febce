//! Recent capture links with copy, open, QR, enable/disable and delete.

use leptos::prelude::*;

use crate::net::api::{QR_SIZE, capture_link_qr_url};
use crate::net::types::CaptureLink;
use crate::state::audience::{CaptureLinksState, toggle_label};
use crate::state::toast::{ToastKind, ToastState};

/// `on_changed` fires after a successful toggle or delete so the owner can
/// reload the list.
#[component]
pub fn CaptureLinksTable(state: RwSignal<CaptureLinksState>, on_changed: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let row = move |link: CaptureLink| {
        let slug = link.slug.clone();
        let url = crate::util::clipboard::absolute_url(&link.public_path());
        let qr_url = capture_link_qr_url(&link.slug, QR_SIZE);
        let (tags, hidden_tags) = link.visible_tags();
        let tags = tags.to_vec();
        let disabled = link.disabled;

        let on_copy = {
            let url = url.clone();
            move |_| {
                if crate::util::clipboard::copy_text(&url) {
                    super::toaster::notify(toasts, ToastKind::Success, "Link copied", None);
                }
            }
        };
        let on_toggle = {
            let slug = slug.clone();
            move |_| toggle_link(state, toasts, on_changed, slug.clone(), disabled)
        };
        let on_delete = {
            let slug = slug.clone();
            move |_| delete_link(state, toasts, on_changed, slug.clone())
        };
        let busy = {
            let slug = slug.clone();
            move || state.get().is_busy(&slug)
        };

        view! {
            <tr>
                <td>
                    <div class="table__primary">{link.display_title().to_owned()}</div>
                    <div class="table__secondary">"/"{slug.clone()}</div>
                </td>
                <td class="table__badges">
                    {link.allows("email").then(|| view! { <span class="badge">"Email"</span> })}
                    {link.allows("sms").then(|| view! { <span class="badge">"SMS"</span> })}
                </td>
                <td>
                    <div class="table__badges">
                        {tags.into_iter().map(|t| view! { <span class="badge badge--muted">{t}</span> }).collect_view()}
                        {(hidden_tags > 0).then(|| view! { <span class="table__secondary">"+"{hidden_tags}" more"</span> })}
                    </div>
                    {match link.redirect_url.clone().filter(|u| !u.is_empty()) {
                        Some(redirect) => view! {
                            <a class="table__link" href=redirect.clone() target="_blank" rel="noreferrer">{redirect.clone()}</a>
                        }
                        .into_any(),
                        None => view! { <span class="table__secondary">"No redirect"</span> }.into_any(),
                    }}
                </td>
                <td>{link.stats.visits}" visits • "{link.stats.submissions}" submissions"</td>
                <td>
                    {disabled.then(|| view! { <span class="badge badge--danger">"Disabled"</span> })}
                    <span>{link.created_at.clone().unwrap_or_else(|| "—".to_owned())}</span>
                </td>
                <td class="table__actions">
                    <button class="btn btn--small" title="Copy link" on:click=on_copy>"Copy"</button>
                    <a class="btn btn--small" href=url target="_blank" rel="noreferrer" title="Open link">"Open"</a>
                    <a class="btn btn--small" href=qr_url target="_blank" rel="noreferrer" title="QR code">"QR"</a>
                    <button
                        class="btn btn--small"
                        class:btn--primary=disabled
                        disabled=busy.clone()
                        on:click=on_toggle
                    >
                        {toggle_label(disabled)}
                    </button>
                    <button class="btn btn--small btn--danger" title="Delete link" disabled=busy on:click=on_delete>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="card">
            <header class="card__header">
                <h2>"Capture links"</h2>
                <p>"Shareable links for collecting compliant opt-ins."</p>
            </header>
            {move || {
                let items = state.get().items;
                if items.is_empty() {
                    view! { <p class="card__note">"No links yet. Generate one above."</p> }.into_any()
                } else {
                    view! {
                        <div class="table-wrap">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Title / Slug"</th>
                                        <th>"Channels"</th>
                                        <th>"Tags / Redirect"</th>
                                        <th>"Stats"</th>
                                        <th>"Created"</th>
                                        <th class="table__actions">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{items.into_iter().map(row).collect_view()}</tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

/// PATCH the negated flag, toast the outcome, reload on success.
fn toggle_link(
    state: RwSignal<CaptureLinksState>,
    toasts: RwSignal<ToastState>,
    on_changed: Callback<()>,
    slug: String,
    currently_disabled: bool,
) {
    if state.get_untracked().busy_slug.is_some() {
        return;
    }
    state.update(|s| s.busy_slug = Some(slug.clone()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use super::toaster::notify;

        let result = crate::net::api::browser_client()
            .set_capture_link_disabled(&slug, !currently_disabled)
            .await;
        state.update(|s| s.busy_slug = None);
        match result {
            Ok(link) => {
                notify(toasts, ToastKind::Success, crate::state::audience::toggle_message(link.disabled), None);
                on_changed.run(());
            }
            Err(e) => {
                log::warn!("capture link toggle failed for {slug}: {e}");
                notify(toasts, ToastKind::Error, "Update failed", Some(&e.to_string()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, on_changed, currently_disabled);
    }
}

/// Confirm, DELETE, toast the outcome, reload on success.
fn delete_link(state: RwSignal<CaptureLinksState>, toasts: RwSignal<ToastState>, on_changed: Callback<()>, slug: String) {
    if state.get_untracked().busy_slug.is_some() {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        use super::toaster::notify;

        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(crate::state::audience::DELETE_CONFIRMATION).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        state.update(|s| s.busy_slug = Some(slug.clone()));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::browser_client().delete_capture_link(&slug).await;
            state.update(|s| s.busy_slug = None);
            match result {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Link deleted", None);
                    on_changed.run(());
                }
                Err(e) => {
                    log::warn!("capture link delete failed for {slug}: {e}");
                    notify(toasts, ToastKind::Error, "Delete failed", Some(&e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, on_changed, slug);
    }
}
