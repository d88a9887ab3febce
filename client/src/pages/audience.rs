//! Audience dashboard: contact list, capture links and the create modals.

use leptos::prelude::*;

use crate::components::capture_links_table::CaptureLinksTable;
use crate::components::contacts_table::ContactsTable;
use crate::components::create_capture_link_modal::CreateCaptureLinkModal;
use crate::components::create_contact_modal::CreateContactModal;
use crate::components::toaster::notify;
use crate::net::types::{Contact, CreatedCaptureLink};
use crate::state::audience::{CaptureLinksState, ContactsState};
use crate::state::toast::{ToastKind, ToastState};

const FUNNEL: &[(&str, &str)] = &[
    ("Connect platforms", "Spotify, Instagram, YouTube, TikTok"),
    ("Promote capture link", "Bio, posts, stories, live"),
    ("Fans opt-in", "Email and/or SMS consent"),
    ("Contacts grow", "Segment with tags & taste"),
    ("Run campaigns", "Email • SMS"),
];

fn load_contacts(contacts: RwSignal<ContactsState>) {
    contacts.update(ContactsState::start_loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::browser_client().list_contacts().await;
        if let Err(e) = &result {
            log::warn!("loading contacts failed: {e}");
        }
        contacts.update(|c| c.apply_load(result));
    });
}

fn load_links(links: RwSignal<CaptureLinksState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::browser_client()
            .list_capture_links(crate::net::api::RECENT_CAPTURE_LINKS)
            .await;
        if let Err(e) = &result {
            log::debug!("loading capture links failed: {e}");
        }
        links.update(|l| l.apply_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = links;
    }
}

#[component]
pub fn AudienceContactsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let contacts = RwSignal::new(ContactsState { loading: true, ..ContactsState::default() });
    let links = RwSignal::new(CaptureLinksState::default());
    let contact_modal_open = RwSignal::new(false);
    let link_modal_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        load_contacts(contacts);
        load_links(links);
    }

    let on_contact_created = Callback::new(move |contact: Contact| {
        contacts.update(|c| c.prepend(contact));
        load_contacts(contacts);
    });
    let on_link_created = Callback::new(move |created: CreatedCaptureLink| {
        links.update(|l| l.last_capture_url = Some(created.url));
        load_links(links);
    });
    let on_links_changed = Callback::new(move |()| load_links(links));

    let on_copy_last = move |_| {
        if let Some(url) = links.get_untracked().last_capture_url {
            if crate::util::clipboard::copy_text(&url) {
                notify(toasts, ToastKind::Success, "Copied", None);
            }
        }
    };

    view! {
        <div class="audience-page">
            <header class="audience-page__header">
                <div>
                    <h1>"Audience contacts"</h1>
                    <p>"Manage owned-channel contacts and consent for email/SMS campaigns."</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| contact_modal_open.set(true)>
                    "Add contact"
                </button>
            </header>

            <section class="card">
                <header class="card__header">
                    <h2>"Grow your direct fan connections"</h2>
                    <p>
                        "Follow this funnel to convert platform followers into compliant, owned email/SMS contacts."
                    </p>
                </header>
                <ol class="funnel">
                    {FUNNEL
                        .iter()
                        .map(|(label, sub)| view! {
                            <li class="funnel__step">
                                <span class="funnel__label">{*label}</span>
                                <span class="funnel__sub">{*sub}</span>
                            </li>
                        })
                        .collect_view()}
                </ol>
                <div class="card__actions">
                    <a class="btn btn--primary" href="/integrations">"Connect platforms"</a>
                    <button class="btn btn--primary" on:click=move |_| link_modal_open.set(true)>
                        "Generate capture link"
                    </button>
                    <Show when=move || links.get().last_capture_url.is_some()>
                        <button class="btn" on:click=on_copy_last>"Copy last link"</button>
                    </Show>
                    <button class="btn" on:click=move |_| contact_modal_open.set(true)>
                        "Add contact manually"
                    </button>
                </div>
            </section>

            <CaptureLinksTable state=links on_changed=on_links_changed/>
            <ContactsTable state=contacts/>

            <Show when=move || contact_modal_open.get()>
                <CreateContactModal
                    on_close=Callback::new(move |()| contact_modal_open.set(false))
                    on_created=on_contact_created
                />
            </Show>
            <Show when=move || link_modal_open.get()>
                <CreateCaptureLinkModal
                    on_close=Callback::new(move |()| link_modal_open.set(false))
                    on_created=on_link_created
                />
            </Show>
        </div>
    }
}
