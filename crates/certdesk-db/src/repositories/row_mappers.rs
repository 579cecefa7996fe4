//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use certdesk_core::{
    AcademicRecord, Course, Document, RepositoryError, Transaction, TransactionStatus, User,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub const USER_SELECT_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

pub const ACADEMIC_RECORD_SELECT_COLUMNS: &str = "id, user_id, student_id, reg_no, session, department, father_name, mother_name, degree_years, degree_months, degree_type, graduation_year, cgpa, courses, created_at, updated_at";

pub const DOCUMENT_SELECT_COLUMNS: &str = "id, user_id, title, qr_code, created_at, updated_at";

pub const TRANSACTION_SELECT_COLUMNS: &str =
    "id, transaction_id, status, amount, document_id, user_id, created_at, updated_at";

/// Format a timestamp the way it is stored.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

/// Translate a `sqlx` error into the port's error type.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepositoryError::AlreadyExists(db.message().to_string());
        }
        if db.is_foreign_key_violation() || db.is_check_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

fn get_datetime(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = get(row, column)?;
    parse_datetime(Some(raw.clone()))
        .ok_or_else(|| RepositoryError::Serialization(format!("bad {column} timestamp: {raw}")))
}

pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: get(row, "id")?,
        name: get(row, "name")?,
        email: get(row, "email")?,
        password_hash: get(row, "password_hash")?,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}

pub fn row_to_academic_record(row: &SqliteRow) -> Result<AcademicRecord, RepositoryError> {
    let courses_json: String = get(row, "courses")?;
    let courses: Vec<Course> = serde_json::from_str(&courses_json)
        .map_err(|e| RepositoryError::Serialization(format!("courses: {e}")))?;

    Ok(AcademicRecord {
        id: get(row, "id")?,
        user_id: get(row, "user_id")?,
        student_id: get(row, "student_id")?,
        reg_no: get(row, "reg_no")?,
        session: get(row, "session")?,
        department: get(row, "department")?,
        father_name: get(row, "father_name")?,
        mother_name: get(row, "mother_name")?,
        degree_years: get(row, "degree_years")?,
        degree_months: get(row, "degree_months")?,
        degree_type: get(row, "degree_type")?,
        graduation_year: get(row, "graduation_year")?,
        cgpa: get(row, "cgpa")?,
        courses,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}

pub fn row_to_document(row: &SqliteRow) -> Result<Document, RepositoryError> {
    Ok(Document {
        id: get(row, "id")?,
        user_id: get(row, "user_id")?,
        title: get(row, "title")?,
        qr_code: get(row, "qr_code")?,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}

pub fn row_to_transaction(row: &SqliteRow) -> Result<Transaction, RepositoryError> {
    let status: String = get(row, "status")?;
    let status = TransactionStatus::parse(&status)
        .ok_or_else(|| RepositoryError::Serialization(format!("unknown status: {status}")))?;

    Ok(Transaction {
        id: get(row, "id")?,
        transaction_id: get(row, "transaction_id")?,
        status,
        amount: get(row, "amount")?,
        document_id: get(row, "document_id")?,
        user_id: get(row, "user_id")?,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}
