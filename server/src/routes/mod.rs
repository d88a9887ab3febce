//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! API routes (health check and the audience proxy) are matched first.
//! Every other path falls through to Leptos SSR, which renders the site
//! shell for any path; the client router then decides what to show, so
//! unknown paths get the home page rather than a 404.

pub mod audience;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{any, get};
use leptos::prelude::*;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by the SSR app and any other same-origin client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/audience/{*rest}", any(audience::forward))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full site: API routes, `/pkg` assets and the Leptos SSR fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;

    let ssr = {
        let opts = leptos_options.clone();
        move |req: Request<Body>| {
            let opts = opts.clone();
            async move {
                let render = leptos_axum::render_app_to_stream(move || wreckshop_client::app::shell(opts.clone()));
                render(req).await
            }
        }
    };

    // Compiled WASM, JS and CSS live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(ssr)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
