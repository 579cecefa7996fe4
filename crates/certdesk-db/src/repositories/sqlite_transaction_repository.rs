//! `SQLite` implementation of the `TransactionRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use certdesk_core::{
    NewTransaction, RepositoryError, Transaction, TransactionRepository, TransactionStatus,
};

use super::row_mappers::{
    TRANSACTION_SELECT_COLUMNS, format_datetime, map_sqlx_error, row_to_transaction,
};

pub struct SqliteTransactionRepository {
    pool: SqlitePool,
}

impl SqliteTransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for SqliteTransactionRepository {
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError> {
        let now = format_datetime(Utc::now());
        sqlx::query(
            "INSERT INTO transactions
                (transaction_id, status, amount, document_id, user_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&transaction.transaction_id)
        .bind(transaction.status.as_str())
        .bind(transaction.amount)
        .bind(transaction.document_id)
        .bind(transaction.user_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.find_by_reference(&transaction.transaction_id)
            .await?
            .ok_or_else(|| {
                RepositoryError::Storage(format!(
                    "transaction {} vanished",
                    transaction.transaction_id
                ))
            })
    }

    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Transaction>, RepositoryError> {
        let query = format!(
            "SELECT {TRANSACTION_SELECT_COLUMNS} FROM transactions WHERE transaction_id = ?"
        );
        let row = sqlx::query(&query)
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_transaction).transpose()
    }

    async fn set_status(
        &self,
        reference: &str,
        status: TransactionStatus,
    ) -> Result<Transaction, RepositoryError> {
        let result = sqlx::query(
            "UPDATE transactions SET status = ?, updated_at = ? WHERE transaction_id = ?",
        )
        .bind(status.as_str())
        .bind(format_datetime(Utc::now()))
        .bind(reference)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("transaction {reference}")));
        }

        self.find_by_reference(reference)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("transaction {reference}")))
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>, RepositoryError> {
        let query = format!(
            "SELECT {TRANSACTION_SELECT_COLUMNS} FROM transactions WHERE user_id = ? ORDER BY id DESC"
        );
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_transaction).collect()
    }
}
