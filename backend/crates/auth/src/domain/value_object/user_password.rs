//! User Password Value Object
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`] is what the client sent (zeroized on drop)
//! - [`UserPassword`] is the Argon2id hash that gets stored
//!
//! A `User` can only ever hold a [`UserPassword`], so plaintext never
//! reaches the store.

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError};

/// Raw password from user input
#[derive(Debug)]
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

/// Stored password hash (PHC string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password. CPU-bound.
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        raw.0.hash().map(Self)
    }

    /// Rebuild from a stored PHC string
    pub fn from_phc(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc).map(Self)
    }

    /// Hash that no password matches, at the normal verify cost
    pub fn unmatchable() -> Self {
        Self(HashedPassword::unmatchable())
    }

    pub fn as_phc_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verify. CPU-bound.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(&raw.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raw_password_is_rejected() {
        assert!(RawPassword::new(String::new()).is_err());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let raw = RawPassword::new("plaintext-marker".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        assert!(!hashed.as_phc_str().contains("plaintext-marker"));
    }

    #[test]
    fn test_verify() {
        let raw = RawPassword::new("s3cret".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        assert!(hashed.verify(&RawPassword::new("s3cret".to_string()).unwrap()));
        assert!(!hashed.verify(&RawPassword::new("s3cretx".to_string()).unwrap()));
    }

    #[test]
    fn test_unmatchable_rejects_everything() {
        let stand_in = UserPassword::unmatchable();
        assert!(!stand_in.verify(&RawPassword::new("s3cret".to_string()).unwrap()));
        assert!(stand_in.as_phc_str().starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }

    #[test]
    fn test_from_phc_roundtrip() {
        let raw = RawPassword::new("s3cret".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        let restored = UserPassword::from_phc(hashed.as_phc_str()).unwrap();
        assert!(restored.verify(&raw));
    }
}
