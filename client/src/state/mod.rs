//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`audience`, `forms`, `consent`, `toast`) so
//! components depend on small focused models provided via Leptos context.

pub mod audience;
pub mod consent;
pub mod forms;
pub mod toast;
