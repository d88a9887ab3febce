//! `/api/audience/*` passthrough handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::proxy::AUDIENCE_PREFIX;
use crate::state::AppState;

/// `ANY /api/audience/{*rest}`: relay to the configured audience backend.
/// The tail comes from the raw request path, still percent-encoded, so an
/// encoded `/` or `?` in a slug stays inside one upstream segment.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let rest = raw_tail(uri.path());
    match state
        .proxy
        .forward(method, rest, uri.query(), headers.get(CONTENT_TYPE), body)
        .await
    {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

/// Still-encoded path after `/api/audience/`.
pub fn raw_tail(path: &str) -> &str {
    path.strip_prefix(AUDIENCE_PREFIX)
        .unwrap_or(path)
        .trim_start_matches('/')
}
