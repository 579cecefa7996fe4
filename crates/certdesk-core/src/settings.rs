//! Settings domain types and validation.
//!
//! Pure values handed to services at construction. Loading them from the
//! environment or command line is the adapter's job.

use thiserror::Error;

/// Default access token lifetime.
pub const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 30;

/// Default refresh token lifetime.
pub const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;

/// Longest access token lifetime accepted (one day).
pub const MAX_ACCESS_TOKEN_MINUTES: i64 = 24 * 60;

/// Longest refresh token lifetime accepted (one year).
pub const MAX_REFRESH_TOKEN_DAYS: i64 = 365;

/// Argon2 memory cost in KiB (OWASP minimum for Argon2id).
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19 * 1024;

pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;

/// Page the QR code on a printed document points at.
pub const DEFAULT_VERIFY_BASE_URL: &str = "http://localhost:5173/verify";

/// Errors from settings validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("JWT secret must not be empty")]
    EmptySecret,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("Invalid password hashing cost: {0}")]
    HashingCost(String),

    #[error("Verification URL must start with http:// or https://: {0}")]
    VerifyUrl(String),
}

/// Token and password settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    /// HMAC key used to sign tokens.
    pub jwt_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
}

impl AuthSettings {
    /// Settings with default lifetimes and hashing cost.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_minutes: DEFAULT_ACCESS_TOKEN_MINUTES,
            refresh_token_days: DEFAULT_REFRESH_TOKEN_DAYS,
            argon2_memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            argon2_iterations: DEFAULT_ARGON2_ITERATIONS,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(SettingsError::EmptySecret);
        }
        if self.access_token_minutes <= 0 {
            return Err(SettingsError::NonPositive {
                field: "access_token_minutes",
                value: self.access_token_minutes,
            });
        }
        if self.refresh_token_days <= 0 {
            return Err(SettingsError::NonPositive {
                field: "refresh_token_days",
                value: self.refresh_token_days,
            });
        }
        if self.access_token_minutes > MAX_ACCESS_TOKEN_MINUTES {
            return Err(SettingsError::OutOfRange {
                field: "access_token_minutes",
                value: self.access_token_minutes,
                max: MAX_ACCESS_TOKEN_MINUTES,
            });
        }
        if self.refresh_token_days > MAX_REFRESH_TOKEN_DAYS {
            return Err(SettingsError::OutOfRange {
                field: "refresh_token_days",
                value: self.refresh_token_days,
                max: MAX_REFRESH_TOKEN_DAYS,
            });
        }
        Ok(())
    }
}

/// Settings for printed documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Base URL of the public verification page; the reference is appended
    /// as `?ref=...`.
    pub verify_base_url: String,
}

impl DocumentSettings {
    pub fn with_defaults() -> Self {
        Self {
            verify_base_url: DEFAULT_VERIFY_BASE_URL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = &self.verify_base_url;
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(SettingsError::VerifyUrl(url.clone()))
        }
    }

    /// Verification link for a reference number.
    pub fn verify_url(&self, reference: &str) -> String {
        format!("{}?ref={}", self.verify_base_url, reference)
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_auth_settings_are_valid() {
        let settings = AuthSettings::with_secret("s3cret");
        assert_eq!(settings.access_token_minutes, 30);
        assert_eq!(settings.refresh_token_days, 7);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn blank_secret_is_rejected() {
        let settings = AuthSettings::with_secret("   ");
        assert_eq!(settings.validate(), Err(SettingsError::EmptySecret));
    }

    #[test]
    fn zero_lifetime_is_rejected() {
        let settings = AuthSettings {
            refresh_token_days: 0,
            ..AuthSettings::with_secret("s3cret")
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositive {
                field: "refresh_token_days",
                ..
            })
        ));
    }

    #[test]
    fn oversized_lifetimes_are_rejected() {
        let settings = AuthSettings {
            refresh_token_days: 100_000_000_000,
            ..AuthSettings::with_secret("s3cret")
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::OutOfRange {
                field: "refresh_token_days",
                value: 100_000_000_000,
                max: 365,
            })
        );

        let settings = AuthSettings {
            access_token_minutes: 1441,
            ..AuthSettings::with_secret("s3cret")
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::OutOfRange {
                field: "access_token_minutes",
                ..
            })
        ));

        let settings = AuthSettings {
            access_token_minutes: 1440,
            refresh_token_days: 365,
            ..AuthSettings::with_secret("s3cret")
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn verify_url_appends_reference() {
        let settings = DocumentSettings::with_defaults();
        assert_eq!(
            settings.verify_url("TXN1"),
            "http://localhost:5173/verify?ref=TXN1"
        );
    }

    #[test]
    fn verify_base_url_must_be_http() {
        let settings = DocumentSettings {
            verify_base_url: "localhost/verify".to_string(),
        };
        assert!(settings.validate().is_err());
    }
}
