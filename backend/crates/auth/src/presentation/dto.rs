//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register / Login
// ============================================================================

/// Body of `POST /register` and `POST /login`
///
/// Missing fields deserialize as empty strings so that the use cases, not
/// the JSON extractor, decide how to reject them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Common
// ============================================================================

/// `{"message": ...}` body used by every acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_missing_fields_default_empty() {
        let req: CredentialsRequest = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(req.username, "a");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            token: "t".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "token": "t" }));
    }
}
