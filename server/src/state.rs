//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the audience proxy, whose `reqwest::Client` is shared by
//! every request.

use crate::proxy::AudienceProxy;

/// Clone is required by Axum; the inner client is reference-counted.
#[derive(Clone, Debug)]
pub struct AppState {
    pub proxy: AudienceProxy,
}

impl AppState {
    #[must_use]
    pub fn new(proxy: AudienceProxy) -> Self {
        Self { proxy }
    }
}
