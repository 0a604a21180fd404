//! Listings backend configuration
//!
//! Loading from the process environment (and `.env`) only exists in the
//! server build; the browser bundle never reads configuration.

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_DRAFT_PATH: &str = "/lowongan/perusahaan";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Listings backend configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub draft_path: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout_secs = match non_blank("API_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse()
                .context("API_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: non_blank("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: non_blank("API_TOKEN"),
            draft_path: non_blank("LOWONGAN_DRAFT_PATH")
                .unwrap_or_else(|| DEFAULT_DRAFT_PATH.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.draft_path, "/lowongan/perusahaan");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("API_URL", "https://api.example.test/v1"),
            ("API_TOKEN", "secret"),
            ("LOWONGAN_DRAFT_PATH", "/lowongan/draft"),
            ("API_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.test/v1");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.draft_path, "/lowongan/draft");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_token_means_no_auth() {
        let config = config_from(&[("API_TOKEN", "  ")]).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = config_from(&[("API_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("API_TIMEOUT_SECS"));
    }
}
