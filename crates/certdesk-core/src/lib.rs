#![doc = include_str!("../README.md")]

pub mod auth;
pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use auth::{AuthError, Claims, JwtError, PasswordHasher, TokenIssuer, TokenKind, TokenPair};
pub use domain::{
    AcademicRecord, CertificateContext, CertificateRequest, Course, Document, DocumentKind,
    NewAcademicRecord, NewDocument, NewTransaction, NewUser, PrintableDocument, RenderedDocument,
    TestimonialContext, TestimonialRequest, Transaction, TransactionStatus, User, UserUpdate,
};
pub use ports::{
    AcademicRecordRepository, CoreError, DocumentRendererPort, DocumentRepository, RenderError,
    Repos, RepositoryError, TransactionRepository, UserRepository,
};
pub use services::{AppCore, AuthService, DocumentService, PaymentService, UserService};
pub use settings::{AuthSettings, DocumentSettings, SettingsError};
