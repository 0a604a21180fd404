//! Server functions for the listings backend
//!
//! These run on the server so the API token never reaches the browser.

use dioxus::prelude::*;

use crate::types::Lowongan;

#[cfg(feature = "server")]
use super::{ApiClient, ApiConfig, FETCH_ERROR_FALLBACK};

/// Configuration and client, built on first use and shared afterwards.
#[cfg(feature = "server")]
static BACKEND: std::sync::OnceLock<(ApiConfig, ApiClient)> = std::sync::OnceLock::new();

#[cfg(feature = "server")]
fn backend() -> Result<&'static (ApiConfig, ApiClient), ServerFnError> {
    if let Some(backend) = BACKEND.get() {
        return Ok(backend);
    }

    let config = ApiConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid listings API configuration");
        ServerFnError::new(FETCH_ERROR_FALLBACK)
    })?;

    let client = ApiClient::from_config(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to build listings API client");
        ServerFnError::new(FETCH_ERROR_FALLBACK)
    })?;

    tracing::info!(base_url = %config.base_url, "Listings API client ready");
    Ok(BACKEND.get_or_init(|| (config, client)))
}

/// Fetch the current company's draft listings.
///
/// On failure the error text is the message to show the user.
#[server]
pub async fn fetch_draft_lowongan() -> Result<Vec<Lowongan>, ServerFnError> {
    let (config, client) = backend()?;

    client
        .draft_listings(&config.draft_path)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch draft listings");
            ServerFnError::new(e.user_message())
        })
}
