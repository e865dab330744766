//! Login Use Case
//!
//! Verifies credentials and issues a signed bearer token.

use chrono::Utc;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::token_claims::TokenClaims;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub user_id: String,
    /// Seconds since epoch
    pub expires_at: i64,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Every credential failure below collapses into InvalidCredentials
        let user_name = UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;

        // Unknown users still pay for one Argon2 verify
        let password_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(UserPassword::unmatchable);
        let password_valid =
            tokio::task::spawn_blocking(move || password_hash.verify(&raw_password)).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let claims = TokenClaims::new(&user.user_id, Utc::now(), self.config.token_ttl);
        let token = self
            .config
            .signer()
            .sign(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = claims.exp,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            user_id: claims.user_id,
            expires_at: claims.exp,
        })
    }
}
