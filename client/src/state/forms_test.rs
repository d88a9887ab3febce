use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::api::{AudienceClient, Method};
use crate::net::testing::FakeTransport;

fn jane() -> ContactForm {
    ContactForm { display_name: "Jane".into(), email: "jane@x.com".into(), ..ContactForm::default() }
}

#[test]
fn contact_form_defaults_to_email_consent_only() {
    let form = ContactForm::default();
    assert!(form.consent_email);
    assert!(!form.consent_sms);
    assert!(form.can_close());
}

#[test]
fn contact_request_omits_blank_inputs() {
    let req = ContactForm { phone: String::new(), ..jane() }.to_request();
    assert_eq!(req.display_name.as_deref(), Some("Jane"));
    assert_eq!(req.email.as_deref(), Some("jane@x.com"));
    assert!(req.phone.is_none());
    assert_eq!(req.consent, Consent { email: true, sms: false });
}

#[test]
fn begin_submit_blocks_second_submission() {
    let mut form = jane();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(!form.can_close());
}

#[test]
fn successful_create_closes_and_returns_contact() {
    let api = AudienceClient::new(FakeTransport::default().respond(
        201,
        json!({ "data": { "_id": "c1", "displayName": "Jane", "email": "jane@x.com", "consent": { "email": true, "sms": false } } }),
    ));
    let mut form = jane();

    let req = form.begin_submit().unwrap();
    let created = form.finish(block_on(api.create_contact(&req)));

    assert_eq!(created.map(|c| c.id).as_deref(), Some("c1"));
    assert_eq!(form, ContactForm::default());

    let sent = api.transport().requests.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/api/audience/contacts");
    assert_eq!(
        sent[0].body,
        Some(json!({ "displayName": "Jane", "email": "jane@x.com", "consent": { "email": true, "sms": false } }))
    );
}

#[test]
fn failed_create_keeps_modal_open_with_message() {
    let api = AudienceClient::new(FakeTransport::default().respond(500, json!({ "error": "Database unavailable" })));
    let mut form = jane();

    let req = form.begin_submit().unwrap();
    let created = form.finish(block_on(api.create_contact(&req)));

    assert!(created.is_none());
    assert_eq!(form.error.as_deref(), Some("Database unavailable"));
    assert!(!form.submitting);
    assert!(form.can_close());
    assert_eq!(form.display_name, "Jane");
}

#[test]
fn retry_clears_previous_error() {
    let mut form = ContactForm { error: Some("boom".into()), ..jane() };
    form.begin_submit();
    assert!(form.error.is_none());
}

#[test]
fn capture_link_request_lists_checked_channels_in_order() {
    let both = CaptureLinkForm { allow_sms: true, ..CaptureLinkForm::default() }.to_request();
    assert_eq!(both.allowed_channels, vec!["email".to_owned(), "sms".to_owned()]);

    let none = CaptureLinkForm { allow_email: false, ..CaptureLinkForm::default() }.to_request();
    assert!(none.allowed_channels.is_empty());
}

#[test]
fn capture_link_request_splits_tags() {
    let req = CaptureLinkForm {
        title: "Join the list".into(),
        tags: "houston, presave,, vip ".into(),
        redirect_url: "https://artist.test/thanks".into(),
        ..CaptureLinkForm::default()
    }
    .to_request();
    assert_eq!(req.title.as_deref(), Some("Join the list"));
    assert_eq!(req.tags, Some(vec!["houston".to_owned(), "presave".to_owned(), "vip".to_owned()]));
    assert_eq!(req.redirect_url.as_deref(), Some("https://artist.test/thanks"));
    assert!(req.description.is_none());
}

#[test]
fn parse_tags_handles_empty_input() {
    assert_eq!(parse_tags(""), None);
    assert_eq!(parse_tags(" , "), Some(Vec::new()));
}

#[test]
fn capture_link_finish_resets_only_on_success() {
    let mut form = CaptureLinkForm { title: "Drop".into(), ..CaptureLinkForm::default() };
    form.begin_submit();
    let failed = form.finish(Err(ApiError::Status { status: 400, message: "Invalid redirect".into() }));
    assert!(failed.is_err());
    assert_eq!(form.title, "Drop");
    assert!(!form.submitting);

    form.begin_submit();
    let ok = form.finish(Ok(CreatedCaptureLink { url: "u".into(), slug: "s".into(), link: None }));
    assert!(ok.is_ok());
    assert_eq!(form, CaptureLinkForm::default());
}

#[test]
fn contact_request_sends_inputs_as_typed() {
    let req = ContactForm { display_name: "Jane ".into(), phone: " ".into(), ..jane() }.to_request();
    assert_eq!(req.display_name.as_deref(), Some("Jane "));
    assert_eq!(req.phone.as_deref(), Some(" "));
}

#[test]
fn capture_link_form_stays_open_while_submitting() {
    let mut form = CaptureLinkForm { title: "Drop".into(), ..CaptureLinkForm::default() };
    assert!(form.can_close());
    form.begin_submit();
    assert!(!form.can_close());
    form.finish(Err(ApiError::Transport("offline".into())));
    assert!(form.can_close());
}
