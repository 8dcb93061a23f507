use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use http::HeaderValue;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::config("server.host cannot be empty"));
        }

        for origin in &self.allowed_origins {
            validate_origin(origin)?;
        }

        Ok(())
    }
}

/// An origin is `http://` or `https://` followed by a host, usable verbatim
/// as a header value
fn validate_origin(origin: &str) -> ConfigErrorResult<()> {
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));

    match host {
        Some(host) if !host.is_empty() && HeaderValue::from_str(origin).is_ok() => Ok(()),
        _ => Err(ConfigError::config(format!(
            "server.allowed_origins contains an invalid origin: {:?}",
            origin
        ))),
    }
}
