//! Document service - printing and public verification of paid documents.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AcademicRecord, CertificateContext, CertificateRequest, Document, NewDocument,
    PrintableDocument, RenderedDocument, TestimonialContext, TestimonialRequest, Transaction,
    TransactionStatus,
};
use crate::ports::{CoreError, DocumentRendererPort, Repos};
use crate::settings::DocumentSettings;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Public answer to "is this reference number genuine?".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceVerification {
    pub valid: bool,
    pub ref_no: String,
    pub status: TransactionStatus,
    pub amount: f64,
    pub issue_date: String,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub document_title: Option<String>,
    pub message: String,
}

pub struct DocumentService {
    repos: Repos,
    renderer: Arc<dyn DocumentRendererPort>,
    settings: DocumentSettings,
}

impl DocumentService {
    pub fn new(
        repos: Repos,
        renderer: Arc<dyn DocumentRendererPort>,
        settings: DocumentSettings,
    ) -> Self {
        Self {
            repos,
            renderer,
            settings,
        }
    }

    /// Look up a transaction that has been paid for.
    async fn paid_transaction(&self, reference: &str) -> Result<Transaction, CoreError> {
        let transaction = self
            .repos
            .transactions
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| CoreError::NotFound("Transaction not found".to_string()))?;

        if !transaction.is_completed() {
            return Err(CoreError::Validation(
                "Payment not verified. Please complete payment first.".to_string(),
            ));
        }
        Ok(transaction)
    }

    async fn render(&self, document: PrintableDocument) -> Result<RenderedDocument, CoreError> {
        let bytes = self.renderer.render(&document).await?;
        tracing::info!(
            kind = document.kind().as_str(),
            reference = document.reference(),
            size = bytes.len(),
            "Rendered document"
        );
        Ok(RenderedDocument::new(document.kind(), document.reference(), bytes))
    }

    fn today() -> String {
        Utc::now().format(DATE_FORMAT).to_string()
    }

    pub async fn generate_certificate(
        &self,
        request: CertificateRequest,
    ) -> Result<RenderedDocument, CoreError> {
        self.paid_transaction(&request.transaction_id).await?;
        let verify_url = self.settings.verify_url(&request.transaction_id);
        let context = CertificateContext::from_request(request, Self::today(), verify_url);
        self.render(PrintableDocument::Certificate(context)).await
    }

    pub async fn generate_testimonial(
        &self,
        request: TestimonialRequest,
    ) -> Result<RenderedDocument, CoreError> {
        self.paid_transaction(&request.transaction_id).await?;
        let verify_url = self.settings.verify_url(&request.transaction_id);
        let context = TestimonialContext::from_request(request, Self::today(), verify_url);
        self.render(PrintableDocument::Testimonial(context)).await
    }

    /// Check a reference number printed on a document.
    ///
    /// Any existing transaction is reported as valid; `status` tells the
    /// caller whether it was paid.
    pub async fn verify_reference(&self, reference: &str) -> Result<ReferenceVerification, CoreError> {
        let transaction = self
            .repos
            .transactions
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| CoreError::NotFound("Reference number not found".to_string()))?;

        let user = match transaction.user_id {
            Some(id) => self.repos.users.find_by_id(id).await?,
            None => None,
        };
        let document = match transaction.document_id {
            Some(id) => self.repos.documents.find_by_id(id).await?,
            None => None,
        };

        Ok(ReferenceVerification {
            valid: true,
            ref_no: transaction.transaction_id,
            status: transaction.status,
            amount: transaction.amount,
            issue_date: transaction.created_at.format(DATE_FORMAT).to_string(),
            student_name: user.as_ref().map(|u| u.name.clone()),
            student_email: user.map(|u| u.email),
            document_title: document.map(|d| d.title),
            message: "Certificate/Testimonial is valid and authentic".to_string(),
        })
    }

    /// Create a document owned by `user_id`. Its QR token is a fresh UUID.
    pub async fn create_document(&self, user_id: i64, title: &str) -> Result<Document, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("Title must not be empty".to_string()));
        }

        let document = self
            .repos
            .documents
            .insert(NewDocument {
                user_id,
                title: title.to_string(),
                qr_code: uuid::Uuid::new_v4().to_string(),
            })
            .await?;
        tracing::debug!(document_id = document.id, user_id, "Created document");
        Ok(document)
    }

    pub async fn list_documents(&self, user_id: i64) -> Result<Vec<Document>, CoreError> {
        Ok(self.repos.documents.list_for_user(user_id).await?)
    }

    pub async fn academic_record(&self, user_id: i64) -> Result<AcademicRecord, CoreError> {
        self.repos
            .academic_records
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Academic record not found".to_string()))
    }
}
