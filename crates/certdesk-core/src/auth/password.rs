//! Argon2id password hashing.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use super::AuthError;
use crate::settings::{AuthSettings, SettingsError};

/// Hashes and verifies passwords as PHC strings.
///
/// Verification reads the cost parameters from the stored hash, so changing
/// the configured cost does not invalidate existing passwords.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the given memory cost (KiB) and iteration count.
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self, SettingsError> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| SettingsError::HashingCost(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn from_settings(settings: &AuthSettings) -> Result<Self, SettingsError> {
        Self::new(settings.argon2_memory_kib, settings.argon2_iterations)
    }

    /// Hash a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(64, 1).unwrap()
    }

    #[test]
    fn hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse", &hash));
        assert!(!hasher.verify("battery staple", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = hasher();
        let a = hasher.hash("pw").unwrap();
        let b = hasher.hash("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn plaintext_stored_value_never_verifies() {
        assert!(!hasher().verify("hashed_password_here", "hashed_password_here"));
    }

    #[test]
    fn hashes_verify_under_a_different_cost() {
        let cheap = hasher();
        let hash = cheap.hash("pw").unwrap();
        let costlier = PasswordHasher::new(128, 2).unwrap();
        assert!(costlier.verify("pw", &hash));
    }

    #[test]
    fn zero_memory_cost_is_rejected() {
        assert!(PasswordHasher::new(0, 1).is_err());
    }
}
