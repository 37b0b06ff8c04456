//! Application Configuration
//!
//! Values baked in at build time from the environment.

/// Fallback API location for local development
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "authToken";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the task REST API, without a trailing slash
    pub api_base_url: String,
    /// Storage key for the credential token
    pub token_key: String,
}

impl AppConfig {
    /// Read `API_BASE_URL` as captured at compile time
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            token_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
