//! Composition utilities for wiring `SQLite` repositories into the core.
//!
//! Construction only, no domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use certdesk_core::Repos;

use crate::repositories::{
    SqliteAcademicRecordRepository, SqliteDocumentRepository, SqliteTransactionRepository,
    SqliteUserRepository,
};

pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteAcademicRecordRepository::new(pool.clone())),
            Arc::new(SqliteDocumentRepository::new(pool.clone())),
            Arc::new(SqliteTransactionRepository::new(pool)),
        )
    }
}
