//! Document repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Document, NewDocument};

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert a document. An unknown `user_id` is a `Constraint` error.
    async fn insert(&self, document: NewDocument) -> Result<Document, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, RepositoryError>;

    /// Documents owned by a user, newest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Document>, RepositoryError>;
}
