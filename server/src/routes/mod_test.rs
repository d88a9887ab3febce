use axum::body::to_bytes;
use tower::util::ServiceExt;

use super::*;
use crate::config::{UpstreamConfig, UpstreamTimeouts};
use crate::proxy::AudienceProxy;

fn unconfigured_state() -> AppState {
    let proxy = AudienceProxy::new(&UpstreamConfig {
        base_url: None,
        timeouts: UpstreamTimeouts { request_secs: 1, connect_secs: 1 },
    })
    .unwrap();
    AppState::new(proxy)
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = api_routes(unconfigured_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn audience_routes_reach_the_proxy() {
    for (method, uri) in [
        ("GET", "/api/audience/contacts"),
        ("POST", "/api/audience/capture-links"),
        ("PATCH", "/api/audience/capture-links/spring-tour"),
        ("DELETE", "/api/audience/capture-links/spring-tour"),
        ("GET", "/api/audience/capture-links/spring-tour/qr?size=512"),
    ] {
        let response = api_routes(unconfigured_state())
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{method} {uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "audience API not configured");
    }
}

#[tokio::test]
async fn unknown_api_paths_are_not_proxied() {
    let response = api_routes(unconfigured_state())
        .oneshot(Request::builder().uri("/api/other").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn raw_tail_keeps_percent_encoding() {
    assert_eq!(audience::raw_tail("/api/audience/capture-links/a%2Fb"), "capture-links/a%2Fb");
    assert_eq!(audience::raw_tail("/api/audience/contacts"), "contacts");
}

#[tokio::test]
async fn encoded_slug_reaches_upstream_as_one_segment() {
    let upstream = axum::Router::new().route(
        "/api/audience/capture-links/{slug}",
        axum::routing::patch(|axum::extract::Path(slug): axum::extract::Path<String>| async move { slug }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let proxy = AudienceProxy::new(&UpstreamConfig {
        base_url: Some(format!("http://{addr}")),
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap();
    let response = api_routes(AppState::new(proxy))
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/audience/capture-links/a%2Fb")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"a/b");
}
