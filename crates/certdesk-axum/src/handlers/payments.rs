//! Payment handlers - initiation, gateway callback, history.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use certdesk_core::Transaction;
use certdesk_core::services::{PaymentReceipt, PaymentRequest, PaymentVerification};

use crate::auth::CurrentUser;
use crate::dto::VerifyPaymentRequest;
use crate::error::HttpError;
use crate::state::AppState;

/// Start a payment. The transaction is stored as pending.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentReceipt>), HttpError> {
    let receipt = state.core.payments().create(req).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Gateway callback marking a transaction as completed.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<Json<PaymentVerification>, HttpError> {
    Ok(Json(state.core.payments().verify(&req.transaction_id).await?))
}

pub async fn list_mine(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Transaction>>, HttpError> {
    Ok(Json(state.core.payments().list_for_user(user.id).await?))
}
