//! Authenticate Use Case
//!
//! Stateless bearer-token check: no store lookup, no caching.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth_context::AuthContext, token_claims::TokenClaims};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use platform::token::TokenError;

pub struct AuthenticateUseCase {
    config: Arc<AuthConfig>,
}

impl AuthenticateUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Turn a presented token into an [`AuthContext`]
    ///
    /// * `None` token -> `MissingToken`
    /// * bad signature / format / expired -> `InvalidToken`
    ///
    /// `now` is seconds since the Unix epoch.
    pub fn execute(&self, token: Option<&str>, now: i64) -> AuthResult<AuthContext> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let claims: TokenClaims = self.config.signer().verify(token, now)?;

        let user_id: UserId = claims
            .user_id
            .parse()
            .map_err(|_| AuthError::InvalidToken(TokenError::Malformed))?;

        Ok(AuthContext {
            user_id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn issue(config: &AuthConfig, user_id: &UserId, iat: i64) -> String {
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            iat,
            exp: iat + config.token_ttl.as_secs() as i64,
        };
        config.signer().sign(&claims).unwrap()
    }

    #[test]
    fn test_missing_token() {
        let use_case = AuthenticateUseCase::new(Arc::new(AuthConfig::development()));
        assert!(matches!(
            use_case.execute(None, 0),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_valid_token_decodes_to_user() {
        let config = Arc::new(AuthConfig::development());
        let user_id = UserId::new();
        let now = Utc::now().timestamp();
        let token = issue(&config, &user_id, now);

        let context = AuthenticateUseCase::new(config)
            .execute(Some(&token), now)
            .unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.expires_at - context.issued_at, 3600);
    }

    #[test]
    fn test_token_valid_until_one_hour() {
        let config = Arc::new(AuthConfig::development());
        let token = issue(&config, &UserId::new(), 1_000);
        let use_case = AuthenticateUseCase::new(config);

        assert!(use_case.execute(Some(&token), 1_000 + 3599).is_ok());
        assert!(matches!(
            use_case.execute(Some(&token), 1_000 + 3600),
            Err(AuthError::InvalidToken(TokenError::Expired))
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_forbidden() {
        let token = issue(&AuthConfig::new("a"), &UserId::new(), 1_000);
        let use_case = AuthenticateUseCase::new(Arc::new(AuthConfig::new("b")));

        let err = use_case.execute(Some(&token), 1_000).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_non_uuid_subject_is_forbidden() {
        let config = AuthConfig::new("a");
        let claims = TokenClaims {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            iat: 0,
            exp: 10,
        };
        let token = config.signer().sign(&claims).unwrap();

        let err = AuthenticateUseCase::new(Arc::new(config))
            .execute(Some(&token), 5)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
