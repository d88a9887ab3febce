//! Networking for the audience dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the external REST backend (proxied same-origin by the server)
//! and `types` defines its JSON schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
