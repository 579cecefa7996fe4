//! Authentication handlers - register, login, refresh, current user.

use axum::Json;
use axum::extract::State;
use certdesk_core::TokenPair;

use crate::auth::CurrentUser;
use crate::dto::{LoginRequest, RefreshRequest, RegisterRequest, UserResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    let user = state
        .core
        .auth()
        .register(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(user.into()))
}

/// Exchange credentials for an access/refresh pair.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenPair>, HttpError> {
    Ok(Json(state.core.auth().login(&req.email, &req.password).await?))
}

/// Exchange a refresh token for a new pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, HttpError> {
    Ok(Json(state.core.auth().refresh(&req.refresh_token).await?))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
