mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let proxy = proxy::AudienceProxy::new(&config.audience).expect("audience HTTP client build failed");
    if proxy.is_configured() {
        tracing::info!(
            timeout_secs = config.audience.timeouts.request_secs,
            "audience proxy enabled"
        );
    } else {
        tracing::warn!("AUDIENCE_API_URL not set; audience dashboard requests will return 503");
    }

    let state = state::AppState::new(proxy);
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "wreckshop listening");
    axum::serve(listener, app).await.expect("server failed");
}
