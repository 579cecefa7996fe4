//! Minimal JWT (JSON Web Token) implementation using HMAC-SHA256.
//!
//! Only HS256 is produced or accepted. Expiry is checked by
//! [`TokenIssuer`](super::TokenIssuer), not here.

use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HS256";

/// Which half of the token pair a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email).
    pub sub: String,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
    pub kind: TokenKind,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// JWT error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JwtError {
    /// Not three dot-separated base64url parts with JSON inside.
    #[error("invalid JWT format")]
    InvalidFormat,

    #[error("unsupported JWT algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid JWT signature")]
    InvalidSignature,

    #[error("JWT encoding failed: {0}")]
    Encoding(String),
}

fn mac_for(secret: &str) -> Result<HmacSha256, JwtError> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| JwtError::Encoding(e.to_string()))
}

/// Encode and sign a JWT token.
pub fn encode(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let header = Header {
        alg: ALGORITHM.to_string(),
        typ: "JWT".to_string(),
    };
    let header_json = serde_json::to_vec(&header).map_err(|e| JwtError::Encoding(e.to_string()))?;
    let claims_json = serde_json::to_vec(claims).map_err(|e| JwtError::Encoding(e.to_string()))?;

    let signing_input = format!("{}.{}", b64.encode(header_json), b64.encode(claims_json));

    let mut mac = mac_for(secret)?;
    mac.update(signing_input.as_bytes());
    let signature = b64.encode(mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{signature}"))
}

/// Verify the signature of a JWT token and return its claims.
pub fn decode(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let mut parts = token.split('.');
    let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::InvalidFormat);
    };

    let header_bytes = b64.decode(header_b64).map_err(|_| JwtError::InvalidFormat)?;
    let header: Header =
        serde_json::from_slice(&header_bytes).map_err(|_| JwtError::InvalidFormat)?;
    if header.alg != ALGORITHM {
        return Err(JwtError::UnsupportedAlgorithm(header.alg));
    }

    let signature = b64
        .decode(signature_b64)
        .map_err(|_| JwtError::InvalidSignature)?;
    let mut mac = mac_for(secret)?;
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(claims_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| JwtError::InvalidSignature)?;

    let claims_bytes = b64.decode(claims_b64).map_err(|_| JwtError::InvalidFormat)?;
    serde_json::from_slice(&claims_bytes).map_err(|_| JwtError::InvalidFormat)
}
