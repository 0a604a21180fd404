//! HTTP client for the listings backend

use serde::de::DeserializeOwned;

use super::{ApiConfig, ApiError, Result};
use crate::types::{ListingsPayload, Lowongan};

/// REST client for the listings backend
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Create a client with a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create a client from loaded configuration
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Non-2xx responses become [`ApiError::Api`] carrying the body's
    /// `message` field when there is one.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let mut req = self.client.get(&url);

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Listings API returned an error");
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch every draft listing of the current company.
    pub async fn draft_listings(&self, path: &str) -> Result<Vec<Lowongan>> {
        let payload: ListingsPayload = self.get_json(path).await?;
        let listings = payload.into_listings();
        tracing::info!(count = listings.len(), "Fetched draft listings");

        Ok(listings)
    }
}
