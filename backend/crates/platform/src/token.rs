//! Signed Tokens (JWT, HS256)
//!
//! Compact `header.payload.signature` tokens, each part base64url without
//! padding, signed with HMAC-SHA256. Only `HS256` is accepted on verify;
//! a token announcing any other algorithm (including `none`) is rejected
//! before its signature is looked at.
//!
//! The caller owns the claims type. Expiry is enforced through
//! [`ExpiringClaims`]: a token is valid while `now < exp`.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

const ALGORITHM: &str = "HS256";

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token claims encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Claims that carry an expiry (seconds since the Unix epoch)
pub trait ExpiringClaims {
    fn expires_at(&self) -> i64;
}

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

/// HS256 token signer/verifier holding the process-wide secret
#[derive(Clone)]
pub struct TokenSigner {
    key: Zeroizing<Vec<u8>>,
}

impl TokenSigner {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
        }
    }

    /// Serialize and sign `claims`
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: Some("JWT".to_string()),
        };

        let signing_input = format!(
            "{}.{}",
            to_base64url(&serde_json::to_vec(&header)?),
            to_base64url(&serde_json::to_vec(claims)?)
        );
        let signature = hmac_sha256(&self.key, signing_input.as_bytes());

        Ok(format!("{}.{}", signing_input, to_base64url(&signature)))
    }

    /// Check algorithm, signature and expiry, then return the claims
    ///
    /// ## Arguments
    /// * `token` - compact token as presented by the client
    /// * `now` - current time in seconds since the Unix epoch
    pub fn verify<C>(&self, token: &str, now: i64) -> Result<C, TokenError>
    where
        C: DeserializeOwned + ExpiringClaims,
    {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };

        let header: Header = from_base64url(header_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;

        if header.alg != ALGORITHM {
            return Err(TokenError::UnsupportedAlgorithm(header.alg));
        }

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];

        if !verify_hmac_sha256(&self.key, signing_input.as_bytes(), &signature) {
            return Err(TokenError::BadSignature);
        }

        let claims: C = from_base64url(payload_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;

        if now >= claims.expires_at() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    impl ExpiringClaims for TestClaims {
        fn expires_at(&self) -> i64 {
            self.exp
        }
    }

    fn claims(exp: i64) -> TestClaims {
        TestClaims {
            sub: "alice".to_string(),
            exp,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(&claims(2_000)).unwrap();

        assert_eq!(token.split('.').count(), 3);
        let decoded: TestClaims = signer.verify(&token, 1_000).unwrap();
        assert_eq!(decoded, claims(2_000));
    }

    #[test]
    fn test_header_is_standard_hs256() {
        let token = TokenSigner::new("secret").sign(&claims(1)).unwrap();
        let header_b64 = token.split('.').next().unwrap();
        let header: serde_json::Value =
            serde_json::from_slice(&from_base64url(header_b64).unwrap()).unwrap();
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
    }

    #[test]
    fn test_expiry_boundary() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(&claims(5_000)).unwrap();

        assert!(signer.verify::<TestClaims>(&token, 4_999).is_ok());
        assert!(matches!(
            signer.verify::<TestClaims>(&token, 5_000),
            Err(TokenError::Expired)
        ));
        assert!(matches!(
            signer.verify::<TestClaims>(&token, 9_999),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let token = TokenSigner::new("secret").sign(&claims(2_000)).unwrap();
        let result = TokenSigner::new("other").verify::<TestClaims>(&token, 1_000);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(&claims(2_000)).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged_payload = to_base64url(&serde_json::to_vec(&claims(i64::MAX)).unwrap());
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        let result = signer.verify::<TestClaims>(&forged, 1_000);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_alg_none_is_rejected() {
        let signer = TokenSigner::new("secret");
        let header = to_base64url(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = to_base64url(&serde_json::to_vec(&claims(2_000)).unwrap());
        let token = format!("{header}.{payload}.");

        let result = signer.verify::<TestClaims>(&token, 1_000);
        assert!(matches!(result, Err(TokenError::UnsupportedAlgorithm(alg)) if alg == "none"));
    }

    #[test]
    fn test_malformed_tokens() {
        let signer = TokenSigner::new("secret");
        for token in ["", "abc", "a.b", "a.b.c.d", "!!!.???.***"] {
            assert!(
                matches!(signer.verify::<TestClaims>(token, 0), Err(TokenError::Malformed)),
                "expected Malformed for {token:?}"
            );
        }
    }

    #[test]
    fn test_debug_redaction() {
        let signer = TokenSigner::new("super-secret-key");
        assert!(!format!("{:?}", signer).contains("super-secret-key"));
    }
}
