//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No process/filesystem implementation details
//! - Traits are minimal and CRUD-focused for repositories

pub mod academic_record_repository;
pub mod document_renderer;
pub mod document_repository;
pub mod transaction_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

pub use academic_record_repository::AcademicRecordRepository;
pub use document_renderer::{DocumentRendererPort, RenderError};
pub use document_repository::DocumentRepository;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;

use crate::auth::AuthError;
use crate::settings::SettingsError;

/// Container for all repository trait objects.
///
/// Lives in `certdesk-core` so that `AppCore` can accept it without
/// depending on `certdesk-db`.
#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn UserRepository>,
    pub academic_records: Arc<dyn AcademicRecordRepository>,
    pub documents: Arc<dyn DocumentRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        users: Arc<dyn UserRepository>,
        academic_records: Arc<dyn AcademicRecordRepository>,
        documents: Arc<dyn DocumentRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            users,
            academic_records,
            documents,
            transactions,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Invalid input or a request the current state does not allow.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}
