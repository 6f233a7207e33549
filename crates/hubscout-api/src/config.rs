//! Server configuration from environment variables.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use hubscout_core::{defaults, Error, Result};

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS origin whitelist.
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            allowed_origins: parse_allowed_origins(defaults::ALLOWED_ORIGINS),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| defaults::SERVER_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            Err(_) => defaults::SERVER_PORT,
        };
        let origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::ALLOWED_ORIGINS.to_string());

        Ok(Self {
            host,
            port,
            allowed_origins: parse_allowed_origins(&origins),
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

/// Parse a comma-separated CORS origin list.
///
/// Blank entries are skipped and invalid ones dropped with a warning. An
/// empty list falls back to the local development origins.
///
/// ```text
/// ALLOWED_ORIGINS=https://models.example.com,http://localhost:5173
/// ```
pub fn parse_allowed_origins(raw: &str) -> Vec<HeaderValue> {
    let origins: Vec<HeaderValue> = raw
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if origins.is_empty() {
        return default_origins();
    }
    origins
}

fn default_origins() -> Vec<HeaderValue> {
    vec![
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://localhost:5173"),
    ]
}
