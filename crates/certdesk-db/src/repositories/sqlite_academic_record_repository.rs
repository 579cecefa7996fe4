//! `SQLite` implementation of the `AcademicRecordRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use certdesk_core::{AcademicRecord, AcademicRecordRepository, NewAcademicRecord, RepositoryError};

use super::row_mappers::{
    ACADEMIC_RECORD_SELECT_COLUMNS, format_datetime, map_sqlx_error, row_to_academic_record,
};

/// Courses are kept as a JSON array in a TEXT column.
pub struct SqliteAcademicRecordRepository {
    pool: SqlitePool,
}

impl SqliteAcademicRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AcademicRecordRepository for SqliteAcademicRecordRepository {
    async fn insert(&self, record: NewAcademicRecord) -> Result<AcademicRecord, RepositoryError> {
        let courses = serde_json::to_string(&record.courses)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let now = format_datetime(Utc::now());

        sqlx::query(
            "INSERT INTO academic_records (
                user_id, student_id, reg_no, session, department, father_name, mother_name,
                degree_years, degree_months, degree_type, graduation_year, cgpa, courses,
                created_at, updated_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.user_id)
        .bind(&record.student_id)
        .bind(&record.reg_no)
        .bind(&record.session)
        .bind(&record.department)
        .bind(&record.father_name)
        .bind(&record.mother_name)
        .bind(record.degree_years)
        .bind(record.degree_months)
        .bind(&record.degree_type)
        .bind(record.graduation_year)
        .bind(record.cgpa)
        .bind(courses)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.find_by_user(record.user_id).await?.ok_or_else(|| {
            RepositoryError::Storage(format!("academic record for user {} vanished", record.user_id))
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<AcademicRecord>, RepositoryError> {
        let query =
            format!("SELECT {ACADEMIC_RECORD_SELECT_COLUMNS} FROM academic_records WHERE user_id = ?");
        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_academic_record).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteUserRepository;
    use crate::setup::setup_test_database;
    use certdesk_core::{Course, NewUser, UserRepository};

    async fn setup() -> (SqliteAcademicRecordRepository, SqliteUserRepository, i64) {
        let pool = setup_test_database().await.unwrap();
        let users = SqliteUserRepository::new(pool.clone());
        let user = users
            .insert(NewUser {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "x".to_string(),
            })
            .await
            .unwrap();
        (SqliteAcademicRecordRepository::new(pool), users, user.id)
    }

    #[tokio::test]
    async fn test_insert_keeps_courses() {
        let (repo, _, user_id) = setup().await;
        let mut record = NewAcademicRecord::new(user_id, "190101", "2019000001", "2019-2020", 3.75);
        record.courses = vec![
            Course::new("Data Structures", "A+"),
            Course::new("Algorithms", "A"),
        ];

        let stored = repo.insert(record).await.unwrap();
        assert_eq!(stored.courses.len(), 2);
        assert_eq!(stored.courses[1].grade, "A");
        assert_eq!(stored.degree_type, "Bachelor(Engg.)");

        let found = repo.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_one_record_per_user() {
        let (repo, _, user_id) = setup().await;
        let record = NewAcademicRecord::new(user_id, "190101", "2019000001", "2019-2020", 3.75);
        repo.insert(record.clone()).await.unwrap();

        let err = repo.insert(record).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_deleting_user_removes_record() {
        let (repo, users, user_id) = setup().await;
        repo.insert(NewAcademicRecord::new(user_id, "1", "2", "s", 3.0))
            .await
            .unwrap();

        users.delete(user_id).await.unwrap();
        assert_eq!(repo.find_by_user(user_id).await.unwrap(), None);
    }
}
