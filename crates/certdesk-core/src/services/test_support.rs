//! In-memory port implementations shared by service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    AcademicRecord, Document, NewAcademicRecord, NewDocument, NewTransaction, NewUser,
    PrintableDocument, Transaction, TransactionStatus, User, UserUpdate,
};
use crate::ports::{
    AcademicRecordRepository, DocumentRendererPort, DocumentRepository, RenderError, Repos,
    RepositoryError, TransactionRepository, UserRepository,
};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    records: Mutex<Vec<AcademicRecord>>,
    documents: Mutex<Vec<Document>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn repos() -> (Arc<Self>, Repos) {
        let store = Arc::new(Self::default());
        let repos = Repos::new(store.clone(), store.clone(), store.clone(), store.clone());
        (store, repos)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists(user.email));
        }
        let now = Utc::now();
        let stored = User {
            id: users.len() as i64 + 1,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if let Some(email) = &update.email {
            if users.iter().any(|u| u.id != id && &u.email == email) {
                return Err(RepositoryError::AlreadyExists(email.clone()));
            }
        }
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.users.lock().unwrap().retain(|u| u.id != id);
        let mut documents = self.documents.lock().unwrap();
        let removed: Vec<i64> = documents
            .iter()
            .filter(|d| d.user_id == id)
            .map(|d| d.id)
            .collect();
        documents.retain(|d| d.user_id != id);
        for t in self.transactions.lock().unwrap().iter_mut() {
            if t.user_id == Some(id) {
                t.user_id = None;
            }
            if t.document_id.is_some_and(|d| removed.contains(&d)) {
                t.document_id = None;
            }
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl AcademicRecordRepository for MemoryStore {
    async fn insert(&self, record: NewAcademicRecord) -> Result<AcademicRecord, RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let now = Utc::now();
        let stored = AcademicRecord {
            id: records.len() as i64 + 1,
            user_id: record.user_id,
            student_id: record.student_id,
            reg_no: record.reg_no,
            session: record.session,
            department: record.department,
            father_name: record.father_name,
            mother_name: record.mother_name,
            degree_years: record.degree_years,
            degree_months: record.degree_months,
            degree_type: record.degree_type,
            graduation_year: record.graduation_year,
            cgpa: record.cgpa,
            courses: record.courses,
            created_at: now,
            updated_at: now,
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<AcademicRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn insert(&self, document: NewDocument) -> Result<Document, RepositoryError> {
        let mut documents = self.documents.lock().unwrap();
        let now = Utc::now();
        let stored = Document {
            id: documents.len() as i64 + 1,
            user_id: document.user_id,
            title: document.title,
            qr_code: document.qr_code,
            created_at: now,
            updated_at: now,
        };
        documents.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, RepositoryError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Document>, RepositoryError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TransactionRepository for MemoryStore {
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError> {
        let mut transactions = self.transactions.lock().unwrap();
        if transactions
            .iter()
            .any(|t| t.transaction_id == transaction.transaction_id)
        {
            return Err(RepositoryError::AlreadyExists(transaction.transaction_id));
        }
        let now = Utc::now();
        let stored = Transaction {
            id: transactions.len() as i64 + 1,
            transaction_id: transaction.transaction_id,
            status: transaction.status,
            amount: transaction.amount,
            document_id: Some(transaction.document_id),
            user_id: Some(transaction.user_id),
            created_at: now,
            updated_at: now,
        };
        transactions.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Transaction>, RepositoryError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.transaction_id == reference)
            .cloned())
    }

    async fn set_status(
        &self,
        reference: &str,
        status: TransactionStatus,
    ) -> Result<Transaction, RepositoryError> {
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = transactions
            .iter_mut()
            .find(|t| t.transaction_id == reference)
            .ok_or_else(|| RepositoryError::NotFound(reference.to_string()))?;
        transaction.status = status;
        transaction.updated_at = Utc::now();
        Ok(transaction.clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>, RepositoryError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| t.user_id == Some(user_id))
            .cloned()
            .collect())
    }
}

/// Renderer that records what it was asked to print.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: Mutex<Vec<PrintableDocument>>,
}

#[async_trait]
impl DocumentRendererPort for RecordingRenderer {
    async fn render(&self, document: &PrintableDocument) -> Result<Vec<u8>, RenderError> {
        self.rendered.lock().unwrap().push(document.clone());
        Ok(b"%PDF-1.4 test".to_vec())
    }
}

pub fn test_hasher() -> crate::auth::PasswordHasher {
    crate::auth::PasswordHasher::new(64, 1).unwrap()
}
