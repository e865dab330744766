//! Session Token Claims
//!
//! Payload of the signed bearer token issued at login.

use chrono::{DateTime, Utc};
use platform::token::ExpiringClaims;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User identifier (UUID string)
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at, seconds since epoch
    pub iat: i64,
    /// Expires at, seconds since epoch
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(user_id: &UserId, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            user_id: user_id.to_string(),
            iat,
            exp: iat.saturating_add(ttl.as_secs() as i64),
        }
    }
}

impl ExpiringClaims for TokenClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expire_one_ttl_after_issue() {
        let user_id = UserId::new();
        let now = Utc::now();
        let claims = TokenClaims::new(&user_id, now, Duration::from_secs(3600));

        assert_eq!(claims.user_id, user_id.to_string());
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wire_names() {
        let claims = TokenClaims {
            user_id: "u".to_string(),
            iat: 1,
            exp: 2,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"userId":"u","iat":1,"exp":2}"#);
    }
}
