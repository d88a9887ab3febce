use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::FakeTransport;
use crate::net::types::Consent;

fn client(transport: FakeTransport) -> AudienceClient<FakeTransport> {
    AudienceClient::new(transport)
}

#[test]
fn endpoints_encode_slugs() {
    assert_eq!(capture_link_endpoint("abc123"), "/api/audience/capture-links/abc123");
    assert_eq!(capture_link_endpoint("a b/c"), "/api/audience/capture-links/a%20b%2Fc");
    assert_eq!(capture_link_qr_url("abc123", QR_SIZE), "/api/audience/capture-links/abc123/qr?size=512");
}

#[test]
fn list_contacts_accepts_array_payload() {
    let api = client(FakeTransport::default().respond(200, json!({ "data": [{ "_id": "c1" }, { "_id": "c2" }] })));
    let contacts = block_on(api.list_contacts()).unwrap();
    assert_eq!(contacts.len(), 2);

    let sent = api.transport().requests.borrow();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, CONTACTS_ENDPOINT);
    assert!(sent[0].body.is_none());
}

#[test]
fn list_contacts_accepts_items_payload() {
    let api = client(FakeTransport::default().respond(200, json!({ "data": { "items": [{ "_id": "c1" }] } })));
    assert_eq!(block_on(api.list_contacts()).unwrap()[0].id, "c1");
}

#[test]
fn list_contacts_surfaces_backend_error() {
    let api = client(FakeTransport::default().respond(401, json!({ "error": "Unauthorized" })));
    assert_eq!(
        block_on(api.list_contacts()),
        Err(ApiError::Status { status: 401, message: "Unauthorized".into() })
    );
}

#[test]
fn create_contact_posts_body_once() {
    let api = client(FakeTransport::default().respond(
        201,
        json!({ "data": { "_id": "c9", "displayName": "Jane", "email": "jane@x.com", "consent": { "email": true, "sms": false } } }),
    ));
    let body = CreateContactRequest {
        display_name: Some("Jane".into()),
        email: Some("jane@x.com".into()),
        phone: None,
        consent: Consent { email: true, sms: false },
    };

    let created = block_on(api.create_contact(&body)).unwrap();
    assert_eq!(created.id, "c9");

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
fn create_contact_falls_back_to_generic_message() {
    let api = client(FakeTransport::default().respond_raw(500, "<html>oops</html>"));
    let err = block_on(api.create_contact(&CreateContactRequest::default())).unwrap_err();
    assert_eq!(err.to_string(), "Failed to create contact");
}

#[test]
fn transport_failure_passes_through() {
    let api = client(FakeTransport::default().fail("Failed to fetch"));
    assert_eq!(
        block_on(api.list_capture_links(RECENT_CAPTURE_LINKS)),
        Err(ApiError::Transport("Failed to fetch".into()))
    );
}

#[test]
fn list_capture_links_sends_limit() {
    let api = client(FakeTransport::default().respond(200, json!({ "data": [{ "slug": "s1" }] })));
    let links = block_on(api.list_capture_links(10)).unwrap();
    assert_eq!(links[0].slug, "s1");
    assert_eq!(api.transport().requests.borrow()[0].path, "/api/audience/capture-links?limit=10");
}

#[test]
fn create_capture_link_returns_url_and_slug() {
    let api = client(FakeTransport::default().respond(
        201,
        json!({ "data": { "url": "https://wreckshop.test/c/s1", "slug": "s1", "link": { "slug": "s1" } } }),
    ));
    let created = block_on(api.create_capture_link(&CreateCaptureLinkRequest::default())).unwrap();
    assert_eq!(created.url, "https://wreckshop.test/c/s1");
    assert_eq!(created.slug, "s1");
    assert_eq!(created.link.map(|l| l.slug).as_deref(), Some("s1"));
}

#[test]
fn disable_sends_patch_with_flag() {
    let api = client(FakeTransport::default().respond(200, json!({ "data": { "slug": "s1", "disabled": true } })));
    let updated = block_on(api.set_capture_link_disabled("s1", true)).unwrap();
    assert!(updated.disabled);

    let sent = api.transport().requests.borrow();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].path, "/api/audience/capture-links/s1");
    assert_eq!(sent[0].body, Some(json!({ "disabled": true })));
}

#[test]
fn delete_ignores_success_body() {
    let api = client(FakeTransport::default().respond_raw(204, ""));
    assert_eq!(block_on(api.delete_capture_link("s1")), Ok(()));
    assert_eq!(api.transport().requests.borrow()[0].method, Method::Delete);
}

#[test]
fn delete_reports_backend_error() {
    let api = client(FakeTransport::default().respond(404, json!({ "error": "Link not found" })));
    assert_eq!(block_on(api.delete_capture_link("gone")).unwrap_err().to_string(), "Link not found");
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let api = client(FakeTransport::default().respond_raw(200, "not json"));
    assert!(matches!(block_on(api.list_contacts()), Err(ApiError::Decode(_))));
}
