//! Get News Use Case
//!
//! Looks up the caller's stored preferences and fetches matching headlines.

use auth::UserRepository;
use auth::models::user_id::UserId;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::headlines::{HeadlinesClient, HeadlinesQuery};
use crate::error::{NewsError, NewsResult};

pub struct GetNewsUseCase<U, C>
where
    U: UserRepository,
    C: HeadlinesClient,
{
    user_repo: Arc<U>,
    client: Arc<C>,
}

impl<U, C> GetNewsUseCase<U, C>
where
    U: UserRepository,
    C: HeadlinesClient,
{
    pub fn new(user_repo: Arc<U>, client: Arc<C>) -> Self {
        Self { user_repo, client }
    }

    pub async fn execute(&self, user_id: &UserId) -> NewsResult<Value> {
        // A deleted user is reported like one without preferences
        let preferences = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .and_then(|user| user.preferences)
            .ok_or(NewsError::PreferencesNotFound)?;

        let query = HeadlinesQuery::from(preferences);

        tracing::debug!(user_id = %user_id, ?query, "Fetching top headlines");

        self.client.top_headlines(&query).await
    }
}
