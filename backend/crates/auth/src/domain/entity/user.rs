//! User Entity
//!
//! Account record: identity, credentials and news preferences.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    news_preferences::NewsPreferences, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (carried in tokens)
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    /// Argon2id hash, never the raw password
    pub password_hash: UserPassword,
    /// `None` until preferences are provisioned
    pub preferences: Option<NewsPreferences>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user without preferences
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            preferences: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach preferences; an all-empty record counts as none
    pub fn with_preferences(mut self, preferences: NewsPreferences) -> Self {
        self.preferences = preferences.into_non_empty();
        self.updated_at = Utc::now();
        self
    }
}
