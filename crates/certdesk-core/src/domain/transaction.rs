//! Payment transaction types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment state of a transaction.
///
/// A transaction only ever moves from `Pending` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl TransactionStatus {
    /// Parse a status from its stored string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment made by a user for a document.
///
/// `transaction_id` is the public reference number; `id` is the row key.
/// The payment outlives its account: `user_id` and `document_id` become
/// `None` once the owner is deleted, so printed references still verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub amount: f64,
    pub document_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub amount: f64,
    pub document_id: i64,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [TransactionStatus::Pending, TransactionStatus::Completed] {
            assert_eq!(TransactionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransactionStatus::parse("refunded"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
