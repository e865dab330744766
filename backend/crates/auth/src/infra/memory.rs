//! In-Memory Repository
//!
//! Process-local user store for tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record as-is
    pub async fn put(&self, user: User) {
        self.users.write().await.insert(*user.user_id.as_uuid(), user);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;
        if users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};

    fn user(name: &str) -> User {
        let raw = RawPassword::new("pw".to_string()).unwrap();
        User::new(
            UserName::new(name).unwrap(),
            UserPassword::from_raw(&raw).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_duplicate_user_name_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();

        let err = repo.create(&user("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_user_name_match_is_exact() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();
        repo.create(&user("Alice")).await.unwrap();

        let found = repo
            .find_by_user_name(&UserName::new("Alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_name.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let u = user("bob");
        let id = u.user_id;
        repo.create(&u).await.unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo.find_by_id(&UserId::new()).await.unwrap().is_none());
    }
}
