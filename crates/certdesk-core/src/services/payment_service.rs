//! Payment service - the two-step pending/completed payment flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NewTransaction, Transaction, TransactionStatus};
use crate::ports::{
    CoreError, DocumentRepository, RepositoryError, TransactionRepository, UserRepository,
};

/// Request to open a payment for a document.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub user_id: i64,
    pub document_id: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub message: String,
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentVerification {
    pub message: String,
    pub transaction_id: String,
    pub amount: f64,
    pub status: TransactionStatus,
}

/// Build the public reference for a payment: `TXN` + UTC timestamp + user id.
pub fn transaction_reference(now: DateTime<Utc>, user_id: i64) -> String {
    format!("TXN{}{}", now.format("%Y%m%d%H%M%S"), user_id)
}

pub struct PaymentService {
    users: Arc<dyn UserRepository>,
    documents: Arc<dyn DocumentRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl PaymentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        documents: Arc<dyn DocumentRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            users,
            documents,
            transactions,
        }
    }

    /// Open a pending payment.
    pub async fn create(&self, request: PaymentRequest) -> Result<PaymentReceipt, CoreError> {
        self.create_at(request, Utc::now()).await
    }

    pub async fn create_at(
        &self,
        request: PaymentRequest,
        now: DateTime<Utc>,
    ) -> Result<PaymentReceipt, CoreError> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Amount must be a positive number, got {}",
                request.amount
            )));
        }

        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(CoreError::NotFound("User not found".to_string()));
        }
        let document = self
            .documents
            .find_by_id(request.document_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Document not found".to_string()))?;
        if document.user_id != request.user_id {
            return Err(CoreError::Validation(
                "Document does not belong to this user".to_string(),
            ));
        }

        let reference = transaction_reference(now, request.user_id);
        let transaction = self
            .transactions
            .insert(NewTransaction {
                transaction_id: reference,
                status: TransactionStatus::Pending,
                amount: request.amount,
                document_id: request.document_id,
                user_id: request.user_id,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(reference) => CoreError::Conflict(format!(
                    "A payment with reference {reference} already exists, retry in a second"
                )),
                other => other.into(),
            })?;

        tracing::info!(
            reference = %transaction.transaction_id,
            user_id = request.user_id,
            amount = transaction.amount,
            "Payment initiated"
        );

        Ok(PaymentReceipt {
            message: "Payment initiated successfully".to_string(),
            transaction_id: transaction.transaction_id,
            status: transaction.status,
            amount: transaction.amount,
        })
    }

    /// Mark a payment completed. Verifying twice is harmless.
    pub async fn verify(&self, reference: &str) -> Result<PaymentVerification, CoreError> {
        let transaction = self
            .transactions
            .set_status(reference, TransactionStatus::Completed)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => {
                    CoreError::NotFound("Transaction not found".to_string())
                }
                other => other.into(),
            })?;

        tracing::info!(reference = %transaction.transaction_id, "Payment verified");

        Ok(PaymentVerification {
            message: "Payment verified successfully".to_string(),
            transaction_id: transaction.transaction_id,
            amount: transaction.amount,
            status: transaction.status,
        })
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.transactions.list_for_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewDocument, NewUser};
    use crate::ports::Repos;
    use crate::services::test_support::MemoryStore;
    use chrono::TimeZone;

    async fn setup() -> (PaymentService, Repos, i64, i64) {
        let (_, repos) = MemoryStore::repos();
        let user = repos
            .users
            .insert(NewUser {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "x".to_string(),
            })
            .await
            .unwrap();
        let document = repos
            .documents
            .insert(NewDocument {
                user_id: user.id,
                title: "Academic Certificate".to_string(),
                qr_code: "qr".to_string(),
            })
            .await
            .unwrap();
        let service = PaymentService::new(
            repos.users.clone(),
            repos.documents.clone(),
            repos.transactions.clone(),
        );
        (service, repos, user.id, document.id)
    }

    #[test]
    fn test_reference_format() {
        let now = Utc.with_ymd_and_hms(2026, 1, 28, 10, 0, 0).unwrap();
        assert_eq!(transaction_reference(now, 7), "TXN202601281000007");
    }

    #[tokio::test]
    async fn test_create_stores_pending() {
        let (service, repos, user_id, document_id) = setup().await;
        let receipt = service
            .create(PaymentRequest {
                user_id,
                document_id,
                amount: 500.0,
            })
            .await
            .unwrap();

        assert_eq!(receipt.message, "Payment initiated successfully");
        assert_eq!(receipt.status, TransactionStatus::Pending);
        assert!(receipt.transaction_id.starts_with("TXN"));
        assert!(receipt.transaction_id.ends_with(&user_id.to_string()));

        let stored = repos
            .transactions
            .find_by_reference(&receipt.transaction_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.amount, 500.0);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_amounts() {
        let (service, _, user_id, document_id) = setup().await;
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = service
                .create(PaymentRequest {
                    user_id,
                    document_id,
                    amount,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "amount {amount}");
        }
    }

    #[tokio::test]
    async fn test_create_unknown_user_or_document() {
        let (service, _, user_id, document_id) = setup().await;

        let err = service
            .create(PaymentRequest {
                user_id: 99,
                document_id,
                amount: 1.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));

        let err = service
            .create(PaymentRequest {
                user_id,
                document_id: 99,
                amount: 1.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_another_users_document() {
        let (service, repos, _, document_id) = setup().await;
        let other = repos
            .users
            .insert(NewUser {
                name: "Mallory".to_string(),
                email: "mallory@example.com".to_string(),
                password_hash: "x".to_string(),
            })
            .await
            .unwrap();

        let err = service
            .create(PaymentRequest {
                user_id: other.id,
                document_id,
                amount: 500.0,
            })
            .await
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::Validation(msg) if msg == "Document does not belong to this user")
        );
        assert!(repos.transactions.list_for_user(other.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_same_second_conflicts() {
        let (service, _, user_id, document_id) = setup().await;
        let now = Utc::now();
        let request = PaymentRequest {
            user_id,
            document_id,
            amount: 10.0,
        };

        service.create_at(request.clone(), now).await.unwrap();
        let err = service.create_at(request, now).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_verify_is_idempotent() {
        let (service, _, user_id, document_id) = setup().await;
        let receipt = service
            .create(PaymentRequest {
                user_id,
                document_id,
                amount: 300.0,
            })
            .await
            .unwrap();

        let first = service.verify(&receipt.transaction_id).await.unwrap();
        assert_eq!(first.status, TransactionStatus::Completed);
        assert_eq!(first.message, "Payment verified successfully");

        let second = service.verify(&receipt.transaction_id).await.unwrap();
        assert_eq!(second.status, TransactionStatus::Completed);
        assert_eq!(second.amount, 300.0);
    }

    #[tokio::test]
    async fn test_verify_unknown_reference() {
        let (service, _, _, _) = setup().await;
        let err = service.verify("TXN0").await.unwrap_err();
        assert_eq!(err.to_string(), "Transaction not found");
    }
}
