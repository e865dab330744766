//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let user_name = UserName::new(input.user_name)
            .map_err(|e| AuthError::MissingCredentials(e.to_string()))?;
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::MissingCredentials(e.to_string()))?;

        if self.user_repo.find_by_user_name(&user_name).await?.is_some() {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw_password))
            .await?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, password_hash);

        // A concurrent registration can still win the race; the store
        // reports that as UserNameTaken.
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
        })
    }
}
