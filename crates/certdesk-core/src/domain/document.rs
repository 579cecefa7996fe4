//! Issued document records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document a user can pay for and later print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: i64,
    pub title: String,
    pub qr_code: String,
}
