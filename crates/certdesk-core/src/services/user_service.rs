//! User service - profile management for authenticated callers.

use std::sync::Arc;

use serde::Deserialize;

use crate::auth::PasswordHasher;
use crate::domain::{User, UserUpdate};
use crate::ports::{CoreError, RepositoryError, UserRepository};
use crate::services::is_blank;

/// Profile changes requested by a user. Missing or blank fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

/// Service for user profile operations.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Update the caller's own profile.
    pub async fn update_profile(&self, current: &User, update: ProfileUpdate) -> Result<User, CoreError> {
        let mut changes = UserUpdate {
            name: non_blank(update.name).map(|n| n.trim().to_string()),
            ..UserUpdate::default()
        };

        if let Some(email) = non_blank(update.email).map(|e| e.trim().to_string()) {
            if email != current.email {
                if self.users.find_by_email(&email).await?.is_some() {
                    return Err(CoreError::Validation("Email already registered".to_string()));
                }
                changes.email = Some(email);
            }
        }

        if let Some(password) = non_blank(update.password) {
            changes.password_hash = Some(self.hasher.hash(&password)?);
        }

        if changes.is_empty() {
            return Ok(current.clone());
        }

        self.users
            .update(current.id, changes)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(_) => {
                    CoreError::Validation("Email already registered".to_string())
                }
                other => other.into(),
            })
    }

    /// Change the caller's password after checking the current one.
    pub async fn change_password(
        &self,
        current: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), CoreError> {
        if !self.hasher.verify(current_password, &current.password_hash) {
            return Err(CoreError::Validation("Current password is incorrect".to_string()));
        }
        if is_blank(new_password) {
            return Err(CoreError::Validation("New password must not be empty".to_string()));
        }

        let changes = UserUpdate {
            password_hash: Some(self.hasher.hash(new_password)?),
            ..UserUpdate::default()
        };
        self.users.update(current.id, changes).await?;
        tracing::info!(user_id = current.id, "Password changed");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.users.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<User, CoreError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }

    /// Delete an account and its documents. Its transactions stay on record.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.users.delete(id).await?;
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
