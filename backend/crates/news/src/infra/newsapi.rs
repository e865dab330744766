//! NewsAPI Client
//!
//! `GET {base_url}/v2/top-headlines` with the key in `X-Api-Key`.

use serde_json::Value;
use std::sync::Arc;

use crate::application::config::NewsConfig;
use crate::domain::headlines::{HeadlinesClient, HeadlinesQuery};
use crate::error::{NewsError, NewsResult};

const API_KEY_HEADER: &str = "X-Api-Key";
/// Upper bound on provider error body bytes carried into the log
const MAX_LOGGED_BODY: usize = 512;

#[derive(Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    config: Arc<NewsConfig>,
}

impl NewsApiClient {
    /// `http` is shared; its connection pool outlives individual requests
    pub fn new(http: reqwest::Client, config: Arc<NewsConfig>) -> Self {
        Self { http, config }
    }
}

impl HeadlinesClient for NewsApiClient {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> NewsResult<Value> {
        let response = self
            .http
            .get(self.config.top_headlines_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Provider error bodies carry `code` and `message`; keep them for the log only
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Upstream(format!(
                "API returned status: {status}: {}",
                clip(&body)
            )));
        }

        Ok(response.json::<Value>().await?)
    }
}

fn clip(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY {
        return body;
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
