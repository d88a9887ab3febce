use super::*;

#[test]
fn contact_decodes_with_missing_optional_fields() {
    let contact: Contact = serde_json::from_str(r#"{"_id":"c1","email":"jane@x.com"}"#).unwrap();
    assert_eq!(contact.id, "c1");
    assert_eq!(contact.email.as_deref(), Some("jane@x.com"));
    assert!(contact.display_name.is_none());
    assert_eq!(contact.consent, Consent::default());
    assert!(contact.tags.is_empty());
}

#[test]
fn contact_decodes_partial_consent() {
    let contact: Contact = serde_json::from_str(r#"{"_id":"c2","consent":{"sms":true}}"#).unwrap();
    assert!(!contact.consent.email);
    assert!(contact.consent.sms);
}

#[test]
fn contact_label_prefers_name_then_email_then_phone() {
    let mut contact = Contact { phone: Some("+1 555".into()), ..Contact::default() };
    assert_eq!(contact.label(), "+1 555");
    contact.email = Some("jane@x.com".into());
    assert_eq!(contact.label(), "jane@x.com");
    contact.display_name = Some("Jane".into());
    assert_eq!(contact.label(), "Jane");
    assert_eq!(Contact::default().label(), "—");
}

#[test]
fn contact_matches_any_field_case_insensitively() {
    let contact = Contact {
        display_name: Some("Sarah Johnson".into()),
        email: Some("sarah@label.fm".into()),
        phone: Some("+1 555 123 4567".into()),
        ..Contact::default()
    };
    assert!(contact.matches("SARAH"));
    assert!(contact.matches("label.fm"));
    assert!(contact.matches("123"));
    assert!(contact.matches("   "));
    assert!(!contact.matches("houston"));
}

#[test]
fn create_contact_request_omits_blank_fields() {
    let req = CreateContactRequest {
        display_name: Some("Jane".into()),
        email: Some("jane@x.com".into()),
        phone: None,
        consent: Consent { email: true, sms: false },
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "displayName": "Jane",
            "email": "jane@x.com",
            "consent": { "email": true, "sms": false }
        })
    );
}

#[test]
fn capture_link_defaults_and_helpers() {
    let link: CaptureLink = serde_json::from_str(
        r#"{"slug":"abc123","allowedChannels":["email"],"tags":["a","b","c","d","e","f","g"],"stats":{"visits":12}}"#,
    )
    .unwrap();
    assert!(!link.disabled);
    assert!(link.allows("email"));
    assert!(!link.allows("sms"));
    assert_eq!(link.display_title(), "Untitled");
    assert_eq!(link.public_path(), "/c/abc123");
    assert_eq!(link.stats, CaptureLinkStats { visits: 12, submissions: 0 });

    let (shown, hidden) = link.visible_tags();
    assert_eq!(shown.len(), VISIBLE_TAG_COUNT);
    assert_eq!(hidden, 2);
}

#[test]
fn contacts_payload_accepts_list_and_items_shapes() {
    let list: DataEnvelope<ContactsPayload> = serde_json::from_str(r#"{"data":[{"_id":"a"}]}"#).unwrap();
    assert_eq!(list.data.into_items().len(), 1);

    let paged: DataEnvelope<ContactsPayload> =
        serde_json::from_str(r#"{"data":{"items":[{"_id":"a"},{"_id":"b"}],"total":2}}"#).unwrap();
    assert_eq!(paged.data.into_items().len(), 2);

    let empty: DataEnvelope<ContactsPayload> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
    assert!(empty.data.into_items().is_empty());
}

#[test]
fn create_capture_link_request_serializes_channels_always() {
    let req = CreateCaptureLinkRequest { allowed_channels: vec![], ..CreateCaptureLinkRequest::default() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "allowedChannels": [] }));
}
