//! Same-origin forwarding of `/api/audience/*` to the audience backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this server. Requests are forwarded with
//! their method, query string, body and content type; responses come back
//! with the upstream status, content type and raw bytes so JSON and QR
//! images pass through untouched. Only the proxy's own failures are mapped
//! to `{ "error": ... }` bodies.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::config::UpstreamConfig;

/// Path prefix shared by the public route and the upstream API.
pub const AUDIENCE_PREFIX: &str = "/api/audience";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("audience API not configured")]
    NotConfigured,
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("audience API unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// One shared `reqwest::Client` plus the upstream base URL.
#[derive(Clone, Debug)]
pub struct AudienceProxy {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl AudienceProxy {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Upstream URL for `rest` (the part after `/api/audience/`).
    pub fn upstream_url(&self, rest: &str, query: Option<&str>) -> Option<String> {
        let base = self.base_url.as_deref()?;
        let rest = rest.trim_start_matches('/');
        let mut url = format!("{base}{AUDIENCE_PREFIX}/{rest}");
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(q);
        }
        Some(url)
    }

    /// Forward one request and relay the upstream response.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` without a base URL and `Upstream` when the
    /// backend cannot be reached or its body cannot be read. Upstream error
    /// statuses are relayed, not turned into errors.
    pub async fn forward(
        &self,
        method: Method,
        rest: &str,
        query: Option<&str>,
        content_type: Option<&HeaderValue>,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let url = self.upstream_url(rest, query).ok_or(ProxyError::NotConfigured)?;

        let mut request = self.http.request(method.clone(), &url);
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct.clone());
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let upstream = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "audience upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;
        let status = upstream.status();
        let upstream_type = upstream.headers().get(CONTENT_TYPE).cloned();
        let bytes = upstream.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "audience upstream body read failed");
            ProxyError::Upstream(e.to_string())
        })?;

        tracing::debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "audience proxied");

        let mut response = (status, bytes).into_response();
        match upstream_type {
            Some(ct) => {
                response.headers_mut().insert(CONTENT_TYPE, ct);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        Ok(response)
    }
}
