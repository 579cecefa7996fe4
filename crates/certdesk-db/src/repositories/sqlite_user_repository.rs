//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use certdesk_core::{NewUser, RepositoryError, User, UserRepository, UserUpdate};

use super::row_mappers::{USER_SELECT_COLUMNS, format_datetime, map_sqlx_error, row_to_user};

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> Result<User, RepositoryError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let now = format_datetime(Utc::now());
        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.fetch(result.last_insert_rowid()).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE email = ?");
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users ORDER BY id");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_user).collect()
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, RepositoryError> {
        let current = self.fetch(id).await?;

        sqlx::query(
            "UPDATE users SET name = ?, email = ?, password_hash = ?, updated_at = ? WHERE id = ?",
        )
        .bind(update.name.unwrap_or(current.name))
        .bind(update.email.unwrap_or(current.email))
        .bind(update.password_hash.unwrap_or(current.password_hash))
        .bind(format_datetime(Utc::now()))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.fetch(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("user {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.try_get("count")
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}
