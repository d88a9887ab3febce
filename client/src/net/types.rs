//! Wire types for the external audience API.
//!
//! Field names follow the backend's camelCase JSON. Optional fields the
//! backend may omit default instead of failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Per-channel consent flags. Enforcement lives in the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub sms: bool,
}

/// An audience contact as returned by `/api/audience/contacts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub consent: Consent,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Contact {
    /// Best available human label: name, then email, then phone.
    pub fn label(&self) -> &str {
        [&self.display_name, &self.email, &self.phone]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|v| !v.trim().is_empty())
            .unwrap_or("—")
    }

    /// Case-insensitive substring match over name, email and phone.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.display_name, &self.email, &self.phone]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Visit and opt-in counters for a capture link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureLinkStats {
    #[serde(default)]
    pub visits: u64,
    #[serde(default)]
    pub submissions: u64,
}

/// A shareable opt-in link owned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureLink {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub allowed_channels: Vec<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub stats: CaptureLinkStats,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Tags shown inline before collapsing into "+N more".
pub const VISIBLE_TAG_COUNT: usize = 5;

impl CaptureLink {
    pub fn allows(&self, channel: &str) -> bool {
        self.allowed_channels.iter().any(|c| c == channel)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("Untitled")
    }

    /// Path of the public opt-in page for this link.
    pub fn public_path(&self) -> String {
        format!("/c/{}", self.slug)
    }

    /// The first few tags plus how many were left out.
    pub fn visible_tags(&self) -> (&[String], usize) {
        let shown = self.tags.len().min(VISIBLE_TAG_COUNT);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

/// Body of `POST /api/audience/contacts`. Blank fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub consent: Consent,
}

/// Body of `POST /api/audience/capture-links`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaptureLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub allowed_channels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// `data` payload returned after creating a capture link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedCaptureLink {
    pub url: String,
    pub slug: String,
    #[serde(default)]
    pub link: Option<CaptureLink>,
}

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Contacts come back either as a bare array or wrapped in `{ items }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ContactsPayload {
    List(Vec<Contact>),
    Paged {
        #[serde(default)]
        items: Vec<Contact>,
    },
}

impl ContactsPayload {
    pub fn into_items(self) -> Vec<Contact> {
        match self {
            Self::List(items) | Self::Paged { items } => items,
        }
    }
}

/// Error envelope: `{ "error": "..." }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
