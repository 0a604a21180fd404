//! Error types for the listings API

use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// Shown whenever the backend gives no usable message of its own.
pub const FETCH_ERROR_FALLBACK: &str = "Gagal memuat data";

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Listings API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed, timed out or the body could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the body's `message` field when present
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or(FETCH_ERROR_FALLBACK))]
    Api { status: u16, message: Option<String> },

    /// Success response with a body that is not a listings payload
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a failed response's status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Api {
            status,
            message: extract_message(body),
        }
    }

    /// Text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FETCH_ERROR_FALLBACK.to_string(),
        }
    }
}

/// The non-blank string `message` field of a JSON error body, if any.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}

/// Recover the user message carried by a failed server function call.
pub fn server_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) if !message.trim().is_empty() => message.clone(),
        other => {
            tracing::debug!(error = %other, "Server function failed without a message");
            FETCH_ERROR_FALLBACK.to_string()
        }
    }
}
