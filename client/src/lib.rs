//! # wreckshop-client
//!
//! Leptos frontend for the Wreckshop marketing site and audience dashboard.
//! Rendered on the server by `wreckshop-server` and hydrated in the browser,
//! where the `router` module takes over same-origin link clicks.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
