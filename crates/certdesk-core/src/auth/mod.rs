//! Authentication primitives.
//!
//! - [`jwt`]: HS256 signing and verification of bearer tokens
//! - [`password`]: Argon2id password hashing
//! - [`tokens`]: access/refresh pair issuance and checking

mod error;
pub mod jwt;
mod password;
mod tokens;

pub use error::AuthError;
pub use jwt::{Claims, JwtError, TokenKind};
pub use password::PasswordHasher;
pub use tokens::{TokenIssuer, TokenPair};
