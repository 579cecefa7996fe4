//! Demo data for a fresh database.
//!
//! Seeding runs against an empty `users` table, or resumes a demo account
//! left incomplete by an interrupted run. Each row is only inserted when
//! missing, so calling it on every start is harmless.

use certdesk_core::{
    Course, NewAcademicRecord, NewDocument, NewTransaction, NewUser, Repos, RepositoryError,
    TransactionStatus, User,
};

pub const DEMO_EMAIL: &str = "john.doe@example.com";

const DEMO_DOCUMENT_TITLE: &str = "Academic Certificate";

const DEMO_TRANSACTIONS: [(&str, TransactionStatus, f64); 2] = [
    ("TXN202601281000001", TransactionStatus::Completed, 500.0),
    ("TXN202601281000002", TransactionStatus::Pending, 300.0),
];

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { user_id: i64 },
    /// Nothing was written: the demo data is complete, or the database
    /// belongs to real users.
    Skipped,
}

/// Insert the demo student with an academic record, a document and two
/// transactions (one paid, one pending).
///
/// `password_hash` must already be hashed with the application's hasher.
/// It is ignored when the demo account already exists.
pub async fn seed_demo_data(repos: &Repos, password_hash: String) -> Result<SeedOutcome, RepositoryError> {
    let (user, mut wrote) = match repos.users.find_by_email(DEMO_EMAIL).await? {
        Some(user) => (user, false),
        None if repos.users.count().await? > 0 => {
            tracing::debug!("Users present, skipping demo seed");
            return Ok(SeedOutcome::Skipped);
        }
        None => {
            let user = repos
                .users
                .insert(NewUser {
                    name: "John Doe".to_string(),
                    email: DEMO_EMAIL.to_string(),
                    password_hash,
                })
                .await?;
            (user, true)
        }
    };

    wrote |= ensure_academic_record(repos, &user).await?;
    let (document_id, wrote_document) = ensure_document(repos, &user).await?;
    wrote |= wrote_document;

    for (reference, status, amount) in DEMO_TRANSACTIONS {
        if repos.transactions.find_by_reference(reference).await?.is_some() {
            continue;
        }
        repos
            .transactions
            .insert(NewTransaction {
                transaction_id: reference.to_string(),
                status,
                amount,
                document_id,
                user_id: user.id,
            })
            .await?;
        wrote = true;
    }

    if !wrote {
        tracing::debug!(user_id = user.id, "Demo data already complete");
        return Ok(SeedOutcome::Skipped);
    }
    tracing::info!(user_id = user.id, email = DEMO_EMAIL, "Seeded demo data");
    Ok(SeedOutcome::Seeded { user_id: user.id })
}

async fn ensure_academic_record(repos: &Repos, user: &User) -> Result<bool, RepositoryError> {
    if repos.academic_records.find_by_user(user.id).await?.is_some() {
        return Ok(false);
    }

    let mut record = NewAcademicRecord::new(user.id, "190101", "2019000001", "2019-2020", 3.75);
    record.father_name = "Michael Doe".to_string();
    record.mother_name = "Sarah Doe".to_string();
    record.graduation_year = 2024;
    record.courses = vec![
        Course::new("Data Structures", "A+"),
        Course::new("Algorithms", "A"),
        Course::new("Database Systems", "A+"),
    ];
    repos.academic_records.insert(record).await?;
    Ok(true)
}

/// Id of the demo document, and whether it had to be created.
async fn ensure_document(repos: &Repos, user: &User) -> Result<(i64, bool), RepositoryError> {
    let existing = repos.documents.list_for_user(user.id).await?;
    if let Some(document) = existing.iter().find(|d| d.title == DEMO_DOCUMENT_TITLE) {
        return Ok((document.id, false));
    }

    let document = repos
        .documents
        .insert(NewDocument {
            user_id: user.id,
            title: DEMO_DOCUMENT_TITLE.to_string(),
            qr_code: "sample_qr_code".to_string(),
        })
        .await?;
    Ok((document.id, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::CoreFactory;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_seed_populates_empty_database() {
        let repos = CoreFactory::build_repos(setup_test_database().await.unwrap());

        let outcome = seed_demo_data(&repos, "hash".to_string()).await.unwrap();
        let SeedOutcome::Seeded { user_id } = outcome else {
            panic!("expected a seeded database");
        };

        let record = repos
            .academic_records
            .find_by_user(user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.student_id, "190101");
        assert_eq!(record.courses.len(), 3);
        assert_eq!(record.father_name, "Michael Doe");
        assert_eq!(record.graduation_year, 2024);

        let paid = repos
            .transactions
            .find_by_reference("TXN202601281000001")
            .await
            .unwrap()
            .unwrap();
        assert!(paid.is_completed());
        let pending = repos
            .transactions
            .find_by_reference("TXN202601281000002")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pending.status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn test_seed_twice_is_noop() {
        let repos = CoreFactory::build_repos(setup_test_database().await.unwrap());

        seed_demo_data(&repos, "hash".to_string()).await.unwrap();
        let second = seed_demo_data(&repos, "hash".to_string()).await.unwrap();

        assert_eq!(second, SeedOutcome::Skipped);
        assert_eq!(repos.users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_completes_interrupted_run() {
        let repos = CoreFactory::build_repos(setup_test_database().await.unwrap());
        // A previous run that stopped right after creating the account.
        let user = repos
            .users
            .insert(NewUser {
                name: "John Doe".to_string(),
                email: DEMO_EMAIL.to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        let outcome = seed_demo_data(&repos, "other".to_string()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { user_id: user.id });

        assert!(
            repos
                .academic_records
                .find_by_user(user.id)
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(repos.documents.list_for_user(user.id).await.unwrap().len(), 1);
        assert_eq!(
            repos.transactions.list_for_user(user.id).await.unwrap().len(),
            2
        );
        assert_eq!(repos.users.count().await.unwrap(), 1);
        let stored = repos.users.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_seed_skips_database_with_other_users() {
        let repos = CoreFactory::build_repos(setup_test_database().await.unwrap());
        repos
            .users
            .insert(NewUser {
                name: "Jane Roe".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        let outcome = seed_demo_data(&repos, "hash".to_string()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Skipped);
        assert!(repos.users.find_by_email(DEMO_EMAIL).await.unwrap().is_none());
    }
}
