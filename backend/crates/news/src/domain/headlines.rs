//! Headlines Provider Contract

use auth::models::news_preferences::NewsPreferences;
use serde::Serialize;
use serde_json::Value;

use crate::error::NewsResult;

/// Filters sent to the provider's top-headlines endpoint
///
/// Each field maps to one query parameter of the same name; `None` fields
/// are omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadlinesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl From<NewsPreferences> for HeadlinesQuery {
    fn from(prefs: NewsPreferences) -> Self {
        Self {
            sources: prefs.sources,
            q: prefs.query,
            category: prefs.category,
            language: prefs.language,
            country: prefs.country,
        }
    }
}

/// Top-headlines provider
///
/// Returns the provider's JSON payload untouched.
#[trait_variant::make(HeadlinesClient: Send)]
pub trait LocalHeadlinesClient {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> NewsResult<Value>;
}
