use cadastros_core::service::RequestError;

/// Errors from the HTTP record service layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Collapse into the user-facing [`RequestError`].
    ///
    /// API errors carrying a JSON `error` message keep it; everything else
    /// is reported with `fallback`.
    pub fn into_request_error(self, fallback: &str) -> RequestError {
        tracing::warn!(error = %self, "Record request failed");
        match &self {
            Self::Api { body, .. } => match api_message(body) {
                Some(message) => RequestError::new(message),
                None => RequestError::new(fallback),
            },
            Self::Request(_) | Self::Config(_) => RequestError::new(fallback),
        }
    }
}

/// `error` field of a `{ error, code }` body.
fn api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}
