//! `SQLite` implementation of the `DocumentRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use certdesk_core::{Document, DocumentRepository, NewDocument, RepositoryError};

use super::row_mappers::{DOCUMENT_SELECT_COLUMNS, format_datetime, map_sqlx_error, row_to_document};

pub struct SqliteDocumentRepository {
    pool: SqlitePool,
}

impl SqliteDocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for SqliteDocumentRepository {
    async fn insert(&self, document: NewDocument) -> Result<Document, RepositoryError> {
        let now = format_datetime(Utc::now());
        let result = sqlx::query(
            "INSERT INTO documents (user_id, title, qr_code, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(document.user_id)
        .bind(&document.title)
        .bind(&document.qr_code)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::Storage(format!("document {id} vanished")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, RepositoryError> {
        let query = format!("SELECT {DOCUMENT_SELECT_COLUMNS} FROM documents WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Document>, RepositoryError> {
        let query = format!(
            "SELECT {DOCUMENT_SELECT_COLUMNS} FROM documents WHERE user_id = ? ORDER BY id DESC"
        );
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_document).collect()
    }
}
