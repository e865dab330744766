//! Authenticated Request Context
//!
//! Inserted into request extensions by the bearer-token middleware and
//! nowhere else. Handlers behind the middleware take it as an extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: UserId,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
