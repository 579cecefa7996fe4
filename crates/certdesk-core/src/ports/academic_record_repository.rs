//! Academic record repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{AcademicRecord, NewAcademicRecord};

/// Repository for academic records (one per user).
#[async_trait]
pub trait AcademicRecordRepository: Send + Sync {
    /// Insert a record. A second record for the same user is `AlreadyExists`.
    async fn insert(&self, record: NewAcademicRecord) -> Result<AcademicRecord, RepositoryError>;

    async fn find_by_user(&self, user_id: i64) -> Result<Option<AcademicRecord>, RepositoryError>;
}
