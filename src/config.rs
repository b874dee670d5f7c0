//! Catalog client configuration
//!
//! Configuration is an explicit value handed to the coordinator at
//! construction. Hosts build it from the environment (`from_env`), tests build
//! it directly.

use std::time::Duration;

use url::Url;

use crate::error::{CatalogError, Result};

/// Default backend address for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Quiet period before a query change turns into a request
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const DEBOUNCE_ENV: &str = "STOREFRONT_DEBOUNCE_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backend base URL without a trailing slash
    pub api_base_url: String,
    /// Trailing-edge debounce delay for query changes
    pub debounce: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl CatalogConfig {
    /// Load from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config = config.with_base_url(&url)?;
        }

        if let Some(raw) = lookup(DEBOUNCE_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{DEBOUNCE_ENV} must be milliseconds, got '{raw}'"))
            })?;
            config = config.with_debounce(Duration::from_millis(millis));
        }

        Ok(config)
    }

    /// Replace the base URL, validating and normalizing it.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|e| CatalogError::Config(format!("invalid API URL '{raw}': {e}")))?;
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_env_overrides() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, "https://shop.example.com/"),
            (DEBOUNCE_ENV, "150"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.debounce, Duration::from_millis(150));
    }

    #[test]
    fn test_bad_debounce_rejected() {
        let err = CatalogConfig::from_lookup(lookup_from(&[(DEBOUNCE_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_bad_url_rejected() {
        let err = CatalogConfig::default().with_base_url("not a url").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
