use std::time::Duration;

use cadastros_core::environment::{LIMITE_DE_LINHAS, URL_BASE};

use crate::error::ClientError;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the records API, without a trailing slash.
    pub base_url: String,
    /// Rows requested per listing page.
    pub page_size: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: URL_BASE.to_string(),
            page_size: LIMITE_DE_LINHAS,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `URL_BASE`             | `http://localhost:3333`  |
    /// | `LIMITE_DE_LINHAS`     | `5`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Result<Self, ClientError> {
        let defaults = Self::default();

        let base_url = std::env::var("URL_BASE").unwrap_or(defaults.base_url);
        let page_size = parse_var("LIMITE_DE_LINHAS", defaults.page_size)?;
        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;

        if page_size == 0 {
            return Err(ClientError::Config(
                "LIMITE_DE_LINHAS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
            request_timeout_secs,
        })
    }

    /// Read a `.env` file if present, then [`from_env`](Self::from_env).
    pub fn load() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `<base_url>/<resource>`
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ClientError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ClientError::Config(format!("{name} must be a valid number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}
