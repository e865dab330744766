//! News Router

use auth::middleware::{AuthMiddlewareState, require_bearer_token};
use auth::{AuthConfig, PgUserRepository, UserRepository};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use crate::domain::headlines::HeadlinesClient;
use crate::infra::newsapi::NewsApiClient;
use crate::presentation::handlers::{self, NewsAppState};

/// Create the News router with PostgreSQL repository and NewsAPI client
pub fn news_router(
    repo: PgUserRepository,
    client: NewsApiClient,
    auth_config: Arc<AuthConfig>,
) -> Router {
    news_router_generic(repo, client, auth_config)
}

/// Create a generic News router
///
/// All routes require a bearer token.
pub fn news_router_generic<R, C>(repo: R, client: C, auth_config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    C: HeadlinesClient + Clone + Send + Sync + 'static,
{
    let state = NewsAppState {
        repo: Arc::new(repo),
        client: Arc::new(client),
    };

    Router::new()
        .route(
            "/preferences",
            get(handlers::get_preferences).put(handlers::update_preferences),
        )
        .route("/news", get(handlers::get_news::<R, C>))
        .route_layer(from_fn_with_state(
            AuthMiddlewareState::new(auth_config),
            require_bearer_token,
        ))
        .with_state(state)
}
