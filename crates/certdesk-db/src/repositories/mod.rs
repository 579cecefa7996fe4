//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_academic_record_repository;
mod sqlite_document_repository;
mod sqlite_transaction_repository;
mod sqlite_user_repository;

pub use sqlite_academic_record_repository::SqliteAcademicRecordRepository;
pub use sqlite_document_repository::SqliteDocumentRepository;
pub use sqlite_transaction_repository::SqliteTransactionRepository;
pub use sqlite_user_repository::SqliteUserRepository;
