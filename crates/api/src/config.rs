use axum::http::HeaderValue;

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3333`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Load sample cities and people at startup (default: `true`).
    pub seed_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3333,
            cors_origins: vec!["http://localhost:3000".into()],
            request_timeout_secs: 30,
            seed_data: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3333`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `SEED_DATA`            | `true`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "u16",
                value: raw,
            })?,
            Err(_) => defaults.port,
        };

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw)?,
            Err(_) => defaults.cors_origins,
        };

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value: raw,
            })?,
            Err(_) => defaults.request_timeout_secs,
        };

        let seed_data = match std::env::var("SEED_DATA") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "SEED_DATA",
                expected: "boolean",
                value: raw,
            })?,
            Err(_) => defaults.seed_data,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_data,
        })
    }
}

/// Comma-separated origins; each must be a valid header value.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map(|_| origin.to_string())
                .map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "origin list",
                    value: origin.to_string(),
                })
        })
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
