//! API configuration
//!
//! Three values drive every request: the base URL and the two optional
//! credentials. Both credentials are appended to the query string when
//! present (`access_token`/`oauth_token` for the bearer token, `key` for
//! the API key), so either or both may be configured.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://admin.googleapis.com";

pub const ENV_BASE_URL: &str = "DIRTOOL_BASE_URL";
pub const ENV_BEARER_TOKEN: &str = "DIRTOOL_BEARER_TOKEN";
pub const ENV_API_KEY: &str = "DIRTOOL_API_KEY";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://admin.googleapis.com`.
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), bearer_token: None, api_key: None }
    }
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self { base_url: base_url.into(), bearer_token, api_key }
    }

    /// Load the configuration from `DIRTOOL_*` environment variables.
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: non_empty_var(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bearer_token: non_empty_var(ENV_BEARER_TOKEN),
            api_key: non_empty_var(ENV_API_KEY),
        }
    }
}

/// An empty string is treated the same as an unset variable.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://admin.googleapis.com");
        assert!(config.bearer_token.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_empty_credential_is_absent() {
        env::set_var("DIRTOOL_TEST_EMPTY", "");
        assert_eq!(non_empty_var("DIRTOOL_TEST_EMPTY"), None);
        env::remove_var("DIRTOOL_TEST_EMPTY");

        env::set_var("DIRTOOL_TEST_SET", "ya29.token");
        assert_eq!(non_empty_var("DIRTOOL_TEST_SET"), Some("ya29.token".to_string()));
        env::remove_var("DIRTOOL_TEST_SET");
    }
}
