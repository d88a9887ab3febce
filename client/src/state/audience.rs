//! Contact and capture-link list state for the audience dashboard.
//!
//! DESIGN
//! ======
//! Lists are replaced wholesale on every load; there is no local merging
//! beyond prepending a freshly created contact.

#[cfg(test)]
#[path = "audience_test.rs"]
mod audience_test;

use crate::net::api::ApiError;
use crate::net::types::{CaptureLink, Contact};

/// Contacts table state.
#[derive(Clone, Debug, Default)]
pub struct ContactsState {
    pub items: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
}

impl ContactsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_load(&mut self, result: Result<Vec<Contact>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Show a newly created contact without reloading.
    pub fn prepend(&mut self, contact: Contact) {
        self.items.retain(|c| c.id.is_empty() || c.id != contact.id);
        self.items.insert(0, contact);
    }

    /// Contacts matching the search box.
    pub fn filtered(&self) -> Vec<Contact> {
        self.items.iter().filter(|c| c.matches(&self.query)).cloned().collect()
    }
}

/// Capture-link table state.
#[derive(Clone, Debug, Default)]
pub struct CaptureLinksState {
    pub items: Vec<CaptureLink>,
    /// URL of the link created most recently in this session.
    pub last_capture_url: Option<String>,
    /// Slug with a toggle/delete request in flight.
    pub busy_slug: Option<String>,
}

impl CaptureLinksState {
    /// Load failures are silent; the previous list stays on screen.
    pub fn apply_load(&mut self, result: Result<Vec<CaptureLink>, ApiError>) {
        if let Ok(items) = result {
            self.items = items;
        }
    }

    pub fn is_busy(&self, slug: &str) -> bool {
        self.busy_slug.as_deref() == Some(slug)
    }
}

/// Toast title after a successful enable/disable.
pub fn toggle_message(now_disabled: bool) -> &'static str {
    if now_disabled { "Link disabled" } else { "Link enabled" }
}

/// Label of the enable/disable button for a link's current state.
pub fn toggle_label(disabled: bool) -> &'static str {
    if disabled { "Enable" } else { "Disable" }
}

pub const DELETE_CONFIRMATION: &str = "Delete this capture link? This cannot be undone.";
