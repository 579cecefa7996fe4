//! Transaction repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTransaction, Transaction, TransactionStatus};

/// Repository for payment transactions, keyed publicly by reference.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Insert a transaction.
    ///
    /// A duplicate reference is `AlreadyExists`; an unknown user or document
    /// is `Constraint`.
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError>;

    async fn find_by_reference(&self, reference: &str)
    -> Result<Option<Transaction>, RepositoryError>;

    /// Set the status and bump `updated_at`.
    ///
    /// Returns `RepositoryError::NotFound` for an unknown reference.
    async fn set_status(
        &self,
        reference: &str,
        status: TransactionStatus,
    ) -> Result<Transaction, RepositoryError>;

    /// Transactions made by a user, newest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>, RepositoryError>;
}
