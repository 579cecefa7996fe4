//! Access/refresh token issuance.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::AuthError;
use super::jwt::{self, Claims, TokenKind};
use crate::settings::AuthSettings;

/// Token pair handed to a client after login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Issues and checks signed tokens for a subject (the user's email).
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    /// `None` when the configured lifetime does not fit in a `Duration`.
    access_ttl: Option<Duration>,
    refresh_ttl: Option<Duration>,
}

impl TokenIssuer {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            secret: settings.jwt_secret.clone(),
            access_ttl: Duration::try_minutes(settings.access_token_minutes),
            refresh_ttl: Duration::try_days(settings.refresh_token_days),
        }
    }

    /// Issue a fresh access/refresh pair.
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        self.issue_pair_at(subject, Utc::now())
    }

    pub fn issue_pair_at(&self, subject: &str, now: DateTime<Utc>) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue(subject, TokenKind::Access, now)?,
            refresh_token: self.issue(subject, TokenKind::Refresh, now)?,
            token_type: "bearer".to_string(),
        })
    }

    fn issue(&self, subject: &str, kind: TokenKind, now: DateTime<Utc>) -> Result<String, AuthError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let exp = ttl
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::Encoding(format!("{kind:?} token lifetime out of range")))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            kind,
        };
        jwt::encode(&claims, &self.secret).map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Return the subject of a valid, unexpired token of the given kind.
    pub fn subject_of(&self, token: &str, kind: TokenKind) -> Option<String> {
        self.subject_of_at(token, kind, Utc::now())
    }

    pub fn subject_of_at(&self, token: &str, kind: TokenKind, now: DateTime<Utc>) -> Option<String> {
        let claims = match jwt::decode(token, &self.secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected token");
                return None;
            }
        };
        if claims.kind != kind {
            tracing::debug!(expected = ?kind, actual = ?claims.kind, "Rejected token of wrong kind");
            return None;
        }
        if claims.exp <= now.timestamp() {
            tracing::debug!(exp = claims.exp, "Rejected expired token");
            return None;
        }
        Some(claims.sub)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
