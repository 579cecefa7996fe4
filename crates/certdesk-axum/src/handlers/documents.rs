//! Document handlers - PDF generation, reference checks, document records.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use certdesk_core::services::ReferenceVerification;
use certdesk_core::{
    AcademicRecord, CertificateRequest, Document, RenderedDocument, TestimonialRequest,
};

use crate::auth::CurrentUser;
use crate::dto::{CreateDocumentRequest, VerifyRefRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// PDF download response.
fn pdf_attachment(document: RenderedDocument) -> Result<Response, HttpError> {
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename={}",
        document.filename
    ))
    .map_err(|e| HttpError::Internal(format!("Invalid attachment name: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}

pub async fn generate_certificate(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CertificateRequest>,
) -> Result<Response, HttpError> {
    tracing::debug!(user_id = user.id, reference = %req.transaction_id, "Certificate requested");
    let document = state.core.documents().generate_certificate(req).await?;
    pdf_attachment(document)
}

pub async fn generate_testimonial(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<TestimonialRequest>,
) -> Result<Response, HttpError> {
    tracing::debug!(user_id = user.id, reference = %req.transaction_id, "Testimonial requested");
    let document = state.core.documents().generate_testimonial(req).await?;
    pdf_attachment(document)
}

/// Public check of a printed reference number.
pub async fn verify_ref(
    State(state): State<AppState>,
    Json(req): Json<VerifyRefRequest>,
) -> Result<Json<ReferenceVerification>, HttpError> {
    Ok(Json(state.core.documents().verify_reference(&req.ref_no).await?))
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Document>>, HttpError> {
    Ok(Json(state.core.documents().list_documents(user.id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), HttpError> {
    let document = state
        .core
        .documents()
        .create_document(user.id, &req.title)
        .await?;
    Ok((StatusCode::CREATED, Json(document)))
}

pub async fn academic_record(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<AcademicRecord>, HttpError> {
    Ok(Json(state.core.documents().academic_record(user.id).await?))
}
