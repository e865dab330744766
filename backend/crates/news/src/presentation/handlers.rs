//! HTTP Handlers
//!
//! Every handler here sits behind `require_bearer_token`, so an
//! [`AuthContext`] is always present.

use auth::AuthContext;
use auth::UserRepository;
use auth::models::MessageResponse;
use axum::Json;
use axum::extract::State;
use serde_json::Value;
use std::sync::Arc;

use crate::application::GetNewsUseCase;
use crate::domain::headlines::HeadlinesClient;
use crate::error::NewsResult;

/// Shared state for news handlers
#[derive(Clone)]
pub struct NewsAppState<R, C>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    C: HeadlinesClient + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub client: Arc<C>,
}

// ============================================================================
// Preferences
// ============================================================================

/// GET /preferences
///
/// Acknowledgement only; stored preferences are not returned.
pub async fn get_preferences(ctx: AuthContext) -> Json<MessageResponse> {
    tracing::debug!(user_id = %ctx.user_id, "Preferences read");
    Json(MessageResponse::new("News preferences retrieved successfully"))
}

/// PUT /preferences
///
/// Acknowledgement only; the request body is ignored and nothing is stored.
pub async fn update_preferences(ctx: AuthContext) -> Json<MessageResponse> {
    tracing::debug!(user_id = %ctx.user_id, "Preferences update");
    Json(MessageResponse::new("News preferences updated successfully"))
}

// ============================================================================
// News
// ============================================================================

/// GET /news
pub async fn get_news<R, C>(
    State(state): State<NewsAppState<R, C>>,
    ctx: AuthContext,
) -> NewsResult<Json<Value>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    C: HeadlinesClient + Clone + Send + Sync + 'static,
{
    let use_case = GetNewsUseCase::new(state.repo.clone(), state.client.clone());

    let payload = use_case.execute(&ctx.user_id).await?;

    Ok(Json(payload))
}
