//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only (`Arc<AuthConfig>`) for the life of the process.

use platform::crypto::random_bytes;
use platform::token::TokenSigner;
use std::fmt;
use std::time::Duration;

/// Lifetime of a login token
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token signing key (`JWT_SECRET`)
    pub jwt_secret: Vec<u8>,
    /// Token lifetime
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: TOKEN_TTL,
        }
    }

    /// Create config with a random signing key (for development)
    pub fn with_random_secret() -> Self {
        Self::new(random_bytes(32))
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Signer bound to this config's key
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(self.jwt_secret.clone())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = AuthConfig::new("secret");
        assert_eq!(config.jwt_secret, b"secret");
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.jwt_secret, config2.jwt_secret);
        assert_eq!(config1.jwt_secret.len(), 32);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("do-not-print");
        assert!(!format!("{:?}", config).contains("do-not-print"));
    }
}
