//! Authentication error types.

use thiserror::Error;

/// Errors raised while authenticating a caller.
///
/// Display strings are client-facing.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Token was valid but its subject no longer exists.
    #[error("User not found")]
    UserNotFound,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Not authenticated")]
    MissingToken,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Errors that mean the caller must (re-)authenticate, as opposed to a
    /// server-side failure.
    pub const fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::Hashing(_) | Self::Encoding(_))
    }
}
