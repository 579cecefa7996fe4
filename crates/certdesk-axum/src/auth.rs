//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use certdesk_core::{AuthError, User};

use crate::error::HttpError;
use crate::state::AppState;

/// The user behind a valid `Authorization: Bearer <access token>` header.
///
/// Handlers that take this extractor reject the request with 401 before
/// running when the header is missing or the token does not resolve.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "Request without bearer token");
            HttpError::from(AuthError::MissingToken)
        })?;

        let user = state.core.auth().authenticate(token).await?;
        Ok(Self(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
