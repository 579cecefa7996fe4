//! Authentication service - registration, login and token exchange.

use std::sync::Arc;

use crate::auth::{AuthError, PasswordHasher, TokenIssuer, TokenKind, TokenPair};
use crate::domain::{NewUser, User};
use crate::ports::{CoreError, RepositoryError, UserRepository};
use crate::services::is_blank;

const EMAIL_TAKEN: &str = "Email already registered";

/// Service for account registration and bearer-token authentication.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account. The email must not be in use.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, CoreError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("Name must not be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(CoreError::Validation(format!("Invalid email address: {email}")));
        }
        if is_blank(password) {
            return Err(CoreError::Validation("Password must not be empty".to_string()));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(CoreError::Validation(EMAIL_TAKEN.to_string()));
        }

        let user = self
            .users
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: self.hasher.hash(password)?,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(_) => CoreError::Validation(EMAIL_TAKEN.to_string()),
                other => other.into(),
            })?;

        tracing::info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    /// Exchange email and password for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, CoreError> {
        let user = self.users.find_by_email(email.trim()).await?;
        let Some(user) = user.filter(|u| self.hasher.verify(password, &u.password_hash)) else {
            tracing::info!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials.into());
        };

        Ok(self.tokens.issue_pair(&user.email)?)
    }

    /// Exchange a refresh token for a new pair. The old refresh token stays
    /// valid until it expires.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, CoreError> {
        let email = self
            .tokens
            .subject_of(refresh_token, TokenKind::Refresh)
            .ok_or(AuthError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(self.tokens.issue_pair(&user.email)?)
    }

    /// Resolve the user behind an access token.
    pub async fn authenticate(&self, access_token: &str) -> Result<User, CoreError> {
        let email = self
            .tokens
            .subject_of(access_token, TokenKind::Access)
            .ok_or(AuthError::InvalidToken)?;

        self.users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }

    /// Hash a password with the configured cost.
    pub fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        Ok(self.hasher.hash(password)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{MemoryStore, test_hasher};
    use crate::settings::AuthSettings;

    fn service() -> (AuthService, TokenIssuer) {
        let (_, repos) = MemoryStore::repos();
        let tokens = TokenIssuer::new(&AuthSettings::with_secret("test-secret"));
        (
            AuthService::new(repos.users, test_hasher(), tokens.clone()),
            tokens,
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let (auth, _) = service();
        let user = auth
            .register("Jane Roe", "jane@example.com", "hunter22")
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Roe");
        assert_ne!(user.password_hash, "hunter22");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (auth, _) = service();
        auth.register("Jane", "jane@example.com", "pw").await.unwrap();

        let err = auth
            .register("Other", "jane@example.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let (auth, _) = service();
        assert!(auth.register(" ", "a@example.com", "pw").await.is_err());
        assert!(auth.register("A", "not-an-email", "pw").await.is_err());
        assert!(auth.register("A", "a@example.com", "").await.is_err());
    }

    #[tokio::test]
    async fn test_register_rejects_whitespace_password() {
        let (auth, _) = service();
        let err = auth.register("A", "a@example.com", "   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Password must not be empty");

        // Surrounding spaces are part of a real password.
        auth.register("A", "a@example.com", " pw ").await.unwrap();
        assert!(auth.login("a@example.com", " pw ").await.is_ok());
        assert!(auth.login("a@example.com", "pw").await.is_err());
    }

    #[tokio::test]
    async fn test_login_then_authenticate() {
        let (auth, _) = service();
        let user = auth.register("Jane", "jane@example.com", "pw").await.unwrap();

        let pair = auth.login("jane@example.com", "pw").await.unwrap();
        assert_eq!(pair.token_type, "bearer");

        let current = auth.authenticate(&pair.access_token).await.unwrap();
        assert_eq!(current.id, user.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_alike() {
        let (auth, _) = service();
        auth.register("Jane", "jane@example.com", "pw").await.unwrap();

        let wrong = auth.login("jane@example.com", "nope").await.unwrap_err();
        let unknown = auth.login("ghost@example.com", "pw").await.unwrap_err();
        assert_eq!(wrong.to_string(), "Incorrect email or password");
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_refresh_issues_new_pair() {
        let (auth, _) = service();
        auth.register("Jane", "jane@example.com", "pw").await.unwrap();
        let pair = auth.login("jane@example.com", "pw").await.unwrap();

        let refreshed = auth.refresh(&pair.refresh_token).await.unwrap();
        assert!(auth.authenticate(&refreshed.access_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let (auth, _) = service();
        auth.register("Jane", "jane@example.com", "pw").await.unwrap();
        let pair = auth.login("jane@example.com", "pw").await.unwrap();

        let err = auth.refresh(&pair.access_token).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid refresh token");
    }

    #[tokio::test]
    async fn test_refresh_for_vanished_user() {
        let (auth, tokens) = service();
        let pair = tokens.issue_pair("ghost@example.com").unwrap();

        let err = auth.refresh(&pair.refresh_token).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_authenticate_rejects_refresh_token() {
        let (auth, _) = service();
        auth.register("Jane", "jane@example.com", "pw").await.unwrap();
        let pair = auth.login("jane@example.com", "pw").await.unwrap();

        let err = auth.authenticate(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, CoreError::Auth(AuthError::InvalidToken)));
    }
}
