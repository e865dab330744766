//! Headlines Provider Configuration

use std::fmt;

/// Provider base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Clone)]
pub struct NewsConfig {
    /// Provider API key (`API_KEY`), sent as `X-Api-Key`
    pub api_key: String,
    /// Provider origin without trailing slash (`NEWS_API_URL`)
    pub base_url: String,
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the top-headlines endpoint
    pub fn top_headlines_url(&self) -> String {
        format!("{}/v2/top-headlines", self.base_url)
    }
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
