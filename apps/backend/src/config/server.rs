use std::env;

use super::parse_var;
use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means the localhost defaults.
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read `BACKEND_HOST` (default `0.0.0.0`), `BACKEND_PORT` (default `8080`)
    /// and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_var(&lookup, "BACKEND_PORT")?.unwrap_or(8080);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_allowed_origins(&raw))
            .unwrap_or_default();
        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
