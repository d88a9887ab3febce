use super::*;

fn contact(id: &str, name: &str, email: &str) -> Contact {
    Contact {
        id: id.to_owned(),
        display_name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        ..Contact::default()
    }
}

#[test]
fn contacts_state_defaults() {
    let s = ContactsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert!(s.query.is_empty());
}

#[test]
fn load_success_replaces_items() {
    let mut s = ContactsState::default();
    s.start_loading();
    s.apply_load(Ok(vec![contact("a", "Ana", "ana@x.com")]));
    assert!(!s.loading);
    assert_eq!(s.items.len(), 1);
    assert!(s.error.is_none());
}

#[test]
fn load_failure_records_message() {
    let mut s = ContactsState::default();
    s.start_loading();
    s.apply_load(Err(ApiError::Status { status: 500, message: "Failed to load contacts".into() }));
    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("Failed to load contacts"));
}

#[test]
fn filtered_applies_query() {
    let mut s = ContactsState {
        items: vec![contact("a", "Ana", "ana@x.com"), contact("b", "Ben", "ben@y.com")],
        ..ContactsState::default()
    };
    assert_eq!(s.filtered().len(), 2);
    s.query = "Y.COM".into();
    let hits = s.filtered();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b");
}

#[test]
fn prepend_puts_new_contact_first_without_duplicates() {
    let mut s = ContactsState { items: vec![contact("a", "Ana", "ana@x.com")], ..ContactsState::default() };
    s.prepend(contact("b", "Ben", "ben@y.com"));
    s.prepend(contact("b", "Ben B", "ben@y.com"));
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].display_name.as_deref(), Some("Ben B"));
}

#[test]
fn capture_link_load_failure_keeps_previous_items() {
    let mut s = CaptureLinksState::default();
    s.apply_load(Ok(vec![CaptureLink { slug: "s1".into(), ..CaptureLink::default() }]));
    s.apply_load(Err(ApiError::Transport("offline".into())));
    assert_eq!(s.items.len(), 1);
}

#[test]
fn busy_slug_tracking() {
    let s = CaptureLinksState { busy_slug: Some("s1".into()), ..CaptureLinksState::default() };
    assert!(s.is_busy("s1"));
    assert!(!s.is_busy("s2"));
}

#[test]
fn toggle_copy_matches_state() {
    assert_eq!(toggle_message(true), "Link disabled");
    assert_eq!(toggle_message(false), "Link enabled");
    assert_eq!(toggle_label(false), "Disable");
    assert_eq!(toggle_label(true), "Enable");
}
