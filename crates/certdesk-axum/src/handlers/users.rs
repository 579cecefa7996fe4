//! User handlers - self-service profile management and lookups.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use certdesk_core::services::ProfileUpdate;

use crate::auth::CurrentUser;
use crate::dto::{ChangePasswordRequest, MessageResponse, UserResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}

/// Update name, email or password. Blank fields are left unchanged.
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<UserResponse>, HttpError> {
    let updated = state.core.users().update_profile(&user, req).await?;
    Ok(Json(updated.into()))
}

pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    state
        .core
        .users()
        .change_password(&user, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

/// Delete the caller's account.
pub async fn delete_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<StatusCode, HttpError> {
    state.core.users().delete(user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Result<Json<Vec<UserResponse>>, HttpError> {
    let users = state.core.users().list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, HttpError> {
    Ok(Json(state.core.users().get(id).await?.into()))
}
