//! REST client for the external audience API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: `AudienceClient` is generic over `HttpTransport`, so the same
//! request building and response decoding runs against fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses carry the
//! backend's `{ "error": ... }` message, or a per-operation fallback when the
//! body has none. Callers surface the message and never retry.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt::Write;

use serde::de::DeserializeOwned;

use super::types::{
    CaptureLink, Contact, ContactsPayload, CreateCaptureLinkRequest, CreateContactRequest, CreatedCaptureLink,
    DataEnvelope, ErrorBody,
};

pub const CONTACTS_ENDPOINT: &str = "/api/audience/contacts";
pub const CAPTURE_LINKS_ENDPOINT: &str = "/api/audience/capture-links";

/// Default `limit` for the dashboard's capture-link list.
pub const RECENT_CAPTURE_LINKS: u32 = 10;
/// QR image edge length requested by the dashboard.
pub const QR_SIZE: u32 = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A JSON request against the same-origin API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors produced by audience API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, offline).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// A success body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Sends one request and returns the response, whatever its status.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.path),
            Method::Post => Request::post(&request.path),
            Method::Patch => Request::patch(&request.path),
            Method::Delete => Request::delete(&request.path),
        };
        let resp = match request.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Typed operations over the audience endpoints.
#[derive(Clone, Debug, Default)]
pub struct AudienceClient<T> {
    transport: T,
}

/// Client bound to the browser's `fetch`.
#[cfg(feature = "hydrate")]
pub fn browser_client() -> AudienceClient<GlooTransport> {
    AudienceClient::new(GlooTransport)
}

impl<T: HttpTransport> AudienceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/audience/contacts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        let resp = self.transport.send(request(Method::Get, CONTACTS_ENDPOINT.to_owned(), None)).await?;
        let envelope: DataEnvelope<Option<ContactsPayload>> = decode(&resp, "Failed to load contacts")?;
        Ok(envelope.data.map(ContactsPayload::into_items).unwrap_or_default())
    }

    /// `POST /api/audience/contacts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_contact(&self, body: &CreateContactRequest) -> Result<Contact, ApiError> {
        let body = encode(body)?;
        let resp = self
            .transport
            .send(request(Method::Post, CONTACTS_ENDPOINT.to_owned(), Some(body)))
            .await?;
        let envelope: DataEnvelope<Contact> = decode(&resp, "Failed to create contact")?;
        Ok(envelope.data)
    }

    /// `GET /api/audience/capture-links?limit=N`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_capture_links(&self, limit: u32) -> Result<Vec<CaptureLink>, ApiError> {
        let path = format!("{CAPTURE_LINKS_ENDPOINT}?limit={limit}");
        let resp = self.transport.send(request(Method::Get, path, None)).await?;
        let envelope: DataEnvelope<Option<Vec<CaptureLink>>> = decode(&resp, "Failed to load capture links")?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// `POST /api/audience/capture-links`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_capture_link(&self, body: &CreateCaptureLinkRequest) -> Result<CreatedCaptureLink, ApiError> {
        let body = encode(body)?;
        let resp = self
            .transport
            .send(request(Method::Post, CAPTURE_LINKS_ENDPOINT.to_owned(), Some(body)))
            .await?;
        let envelope: DataEnvelope<CreatedCaptureLink> = decode(&resp, "Failed to create capture link")?;
        Ok(envelope.data)
    }

    /// `PATCH /api/audience/capture-links/:slug` with `{ disabled }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn set_capture_link_disabled(&self, slug: &str, disabled: bool) -> Result<CaptureLink, ApiError> {
        let body = serde_json::json!({ "disabled": disabled });
        let resp = self
            .transport
            .send(request(Method::Patch, capture_link_endpoint(slug), Some(body)))
            .await?;
        let envelope: DataEnvelope<CaptureLink> = decode(&resp, "Failed to update link")?;
        Ok(envelope.data)
    }

    /// `DELETE /api/audience/capture-links/:slug`. The success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_capture_link(&self, slug: &str) -> Result<(), ApiError> {
        let resp = self
            .transport
            .send(request(Method::Delete, capture_link_endpoint(slug), None))
            .await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(&resp, "Failed to delete link"))
        }
    }
}

fn request(method: Method, path: String, body: Option<serde_json::Value>) -> ApiRequest {
    ApiRequest { method, path, body }
}

pub fn capture_link_endpoint(slug: &str) -> String {
    format!("{CAPTURE_LINKS_ENDPOINT}/{}", encode_path_segment(slug))
}

/// Image URL for a capture link's QR code; used directly as a link target.
pub fn capture_link_qr_url(slug: &str, size: u32) -> String {
    format!("{}/qr?size={size}", capture_link_endpoint(slug))
}

/// Percent-encode everything outside RFC 3986 unreserved characters.
fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

fn encode<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<D: DeserializeOwned>(resp: &ApiResponse, fallback: &str) -> Result<D, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp, fallback));
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_error(resp: &ApiResponse, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&resp.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status: resp.status, message }
}
