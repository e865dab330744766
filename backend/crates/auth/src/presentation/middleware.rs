//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the decoded [`AuthContext`](crate::domain::entity::auth_context::AuthContext)
/// is inserted into the request extensions and the inner handler runs.
/// A missing token is 401, a rejected one 403; the handler is not called
/// in either case.
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let use_case = AuthenticateUseCase::new(state.config.clone());

    let context = use_case.execute(
        extract_bearer_token(req.headers()),
        Utc::now().timestamp(),
    )?;

    tracing::debug!(user_id = %context.user_id, "Bearer token accepted");

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}
