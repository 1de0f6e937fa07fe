//! HTTP server settings.

use std::fmt::Debug;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Listener, CORS and timeout settings for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Browser origins allowed to call the API.
    pub cors_origins: Vec<HeaderValue>,
    /// Upper bound on the handling time of a single request.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read settings from the environment, falling back to local
    /// development values.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    ///
    /// Panics on a value that does not parse.
    pub fn from_env() -> Self {
        let origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        Self {
            host: env_or("HOST", IpAddr::from([0, 0, 0, 0])),
            port: env_or("PORT", 8000),
            cors_origins: parse_origins(&origins)
                .unwrap_or_else(|origin| panic!("Invalid CORS origin '{origin}'")),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|err| panic!("{key} is invalid: {err:?}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, skipping blank entries.
///
/// Returns the first entry that is not a valid header value.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| HeaderValue::from_str(origin).map_err(|_| origin.to_string()))
        .collect()
}
