//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User, UserUpdate};

/// Repository for user accounts.
///
/// Emails are unique; inserting or updating to a taken email yields
/// `RepositoryError::AlreadyExists`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// List all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Apply a partial update and return the stored row.
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, RepositoryError>;

    /// Delete a user and everything they own.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;
}
