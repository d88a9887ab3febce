//! Draft state for the create-contact and create-capture-link modals.
//!
//! DESIGN
//! ======
//! Each form owns its inputs plus a `submitting` flag. `begin_submit` hands
//! out at most one request at a time; `finish` applies the outcome. The modal
//! components only wire inputs and spawn the request in between.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::api::ApiError;
use crate::net::types::{Consent, Contact, CreateCaptureLinkRequest, CreateContactRequest, CreatedCaptureLink};

/// Inputs of the "Add audience contact" modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub consent_email: bool,
    pub consent_sms: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            phone: String::new(),
            consent_email: true,
            consent_sms: false,
            submitting: false,
            error: None,
        }
    }
}

impl ContactForm {
    pub fn to_request(&self) -> CreateContactRequest {
        CreateContactRequest {
            display_name: non_blank(&self.display_name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            consent: Consent { email: self.consent_email, sms: self.consent_sms },
        }
    }

    /// Mark the form as submitting and build the request.
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<CreateContactRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.to_request())
    }

    /// Apply the submission result.
    ///
    /// Success clears the form and yields the created contact (the modal
    /// closes). Failure keeps the inputs, records the message and re-enables
    /// the submit button.
    pub fn finish(&mut self, result: Result<Contact, ApiError>) -> Option<Contact> {
        match result {
            Ok(contact) => {
                self.reset();
                Some(contact)
            }
            Err(e) => {
                self.submitting = false;
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Closing is blocked while a request is in flight.
    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Inputs of the "Create capture link" modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureLinkForm {
    pub title: String,
    pub description: String,
    pub allow_email: bool,
    pub allow_sms: bool,
    pub redirect_url: String,
    /// Comma-separated tag input.
    pub tags: String,
    pub submitting: bool,
}

impl Default for CaptureLinkForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            allow_email: true,
            allow_sms: false,
            redirect_url: String::new(),
            tags: String::new(),
            submitting: false,
        }
    }
}

impl CaptureLinkForm {
    pub fn to_request(&self) -> CreateCaptureLinkRequest {
        let allowed_channels = [(self.allow_email, "email"), (self.allow_sms, "sms")]
            .into_iter()
            .filter_map(|(on, channel)| on.then(|| channel.to_owned()))
            .collect();
        CreateCaptureLinkRequest {
            title: non_blank(&self.title),
            description: non_blank(&self.description),
            allowed_channels,
            redirect_url: non_blank(&self.redirect_url),
            tags: parse_tags(&self.tags),
        }
    }

    /// See [`ContactForm::begin_submit`].
    pub fn begin_submit(&mut self) -> Option<CreateCaptureLinkRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.to_request())
    }

    /// Success clears the form; failure keeps the inputs for another try.
    /// The result is passed through for toasting.
    pub fn finish(&mut self, result: Result<CreatedCaptureLink, ApiError>) -> Result<CreatedCaptureLink, ApiError> {
        match &result {
            Ok(_) => self.reset(),
            Err(_) => self.submitting = false,
        }
        result
    }

    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Split comma-separated tags, trimming and dropping empties.
/// An empty input yields `None` so the field is omitted from the request.
pub fn parse_tags(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

/// Empty inputs are omitted; anything else is sent as typed.
fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
