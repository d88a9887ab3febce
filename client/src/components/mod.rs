//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and dashboard surfaces while reading and
//! writing shared state from Leptos context providers (`ToastState`,
//! `ConsentState`, `Theme`).

pub mod capture_links_table;
pub mod contacts_table;
pub mod cookie_consent;
pub mod create_capture_link_modal;
pub mod create_contact_modal;
pub mod site_footer;
pub mod site_header;
pub mod toaster;
