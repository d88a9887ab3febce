//! Searchable contacts table.

use leptos::prelude::*;

use crate::net::types::Contact;
use crate::state::audience::ContactsState;

fn or_dash(value: Option<&String>) -> String {
    value.filter(|v| !v.trim().is_empty()).map_or_else(|| "—".to_owned(), Clone::clone)
}

fn consent_badge(channel: &'static str, granted: bool) -> impl IntoView {
    let class = if granted { "badge" } else { "badge badge--muted" };
    view! { <span class=class>{channel}" "{if granted { "yes" } else { "no" }}</span> }
}

fn contact_row(contact: Contact) -> impl IntoView {
    view! {
        <tr>
            <td class="table__primary">{or_dash(contact.display_name.as_ref())}</td>
            <td>{or_dash(contact.email.as_ref())}</td>
            <td>{or_dash(contact.phone.as_ref())}</td>
            <td class="table__badges">
                {consent_badge("Email", contact.consent.email)}
                {consent_badge("SMS", contact.consent.sms)}
            </td>
            <td>{or_dash(contact.created_at.as_ref())}</td>
        </tr>
    }
}

#[component]
pub fn ContactsTable(state: RwSignal<ContactsState>) -> impl IntoView {
    let body = move || {
        let s = state.get();
        if s.loading {
            return view! { <p class="card__note">"Loading contacts…"</p> }.into_any();
        }
        if let Some(error) = s.error {
            return view! { <p class="card__note card__note--error">{error}</p> }.into_any();
        }
        let rows = s.filtered();
        if rows.is_empty() {
            return view! { <p class="card__note">"No contacts found."</p> }.into_any();
        }
        view! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Consent"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>{rows.into_iter().map(contact_row).collect_view()}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="card">
            <header class="card__header">
                <h2>"Contacts"</h2>
                <p>"Search and manage your audience contacts."</p>
                <input
                    class="card__search"
                    type="search"
                    placeholder="Search by name, email, or phone"
                    prop:value=move || state.get().query
                    on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                />
            </header>
            {body}
        </section>
    }
}
