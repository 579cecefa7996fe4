//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, PDF tooling).
//!
//! # Structure
//!
//! - `user` - Account types (`User`, `NewUser`, `UserUpdate`)
//! - `academic` - Academic records and course grades
//! - `document` - Issued document records
//! - `transaction` - Payment transactions and their status
//! - `printable` - Certificate/testimonial requests and render contexts

mod academic;
mod document;
pub mod printable;
mod transaction;
mod user;

pub use academic::{AcademicRecord, Course, NewAcademicRecord};
pub use document::{Document, NewDocument};
pub use printable::{
    CertificateContext, CertificateRequest, DocumentKind, PrintableDocument, RenderedDocument,
    TestimonialContext, TestimonialRequest,
};
pub use transaction::{NewTransaction, Transaction, TransactionStatus};
pub use user::{NewUser, User, UserUpdate};
