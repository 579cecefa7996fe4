//! Core services - the application's business logic layer.
//!
//! Services are pure orchestrators over ports: they don't know about
//! concrete implementations.

mod app_core;
mod auth_service;
mod document_service;
mod payment_service;
mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_core::AppCore;
pub use auth_service::AuthService;
pub use document_service::{DocumentService, ReferenceVerification};
pub use payment_service::{
    PaymentReceipt, PaymentRequest, PaymentService, PaymentVerification, transaction_reference,
};
pub use user_service::{ProfileUpdate, UserService};

/// Whitespace-only input counts as blank. Passwords are checked with this
/// but stored untrimmed.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
