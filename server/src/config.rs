//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before `ServerConfig::from_env` runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where `/api/audience/*` requests are forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL without a trailing slash. `None` disables the proxy.
    pub base_url: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub audience: UpstreamConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUDIENCE_API_URL`: audience backend base URL; unset or blank
    ///   leaves the proxy answering 503
    /// - `AUDIENCE_API_TIMEOUT_SECS`: default 15
    /// - `AUDIENCE_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let base_url = std::env::var("AUDIENCE_API_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty());
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse("AUDIENCE_API_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?,
            connect_secs: env_parse("AUDIENCE_API_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { port, audience: UpstreamConfig { base_url, timeouts } })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        _ => Ok(default),
    }
}
