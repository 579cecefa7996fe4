//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types decouple internal domain types from the JSON the API
//! accepts and returns.

pub mod auth;
pub mod user;

pub use auth::{
    ChangePasswordRequest, CreateDocumentRequest, LoginRequest, MessageResponse, RefreshRequest,
    RegisterRequest, VerifyPaymentRequest, VerifyRefRequest,
};
pub use user::UserResponse;
