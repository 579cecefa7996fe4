//! Academic record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPARTMENT: &str = "Computer Science and Engineering";
pub const DEFAULT_DEGREE_TYPE: &str = "Bachelor(Engg.)";
pub const DEFAULT_DEGREE_YEARS: i64 = 4;
pub const DEFAULT_GRADUATION_YEAR: i64 = 2025;

/// A single course line printed on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub grade: String,
}

impl Course {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
        }
    }
}

/// Academic details of a student. Each user has at most one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub id: i64,
    pub user_id: i64,
    pub student_id: String,
    pub reg_no: String,
    pub session: String,
    pub department: String,
    pub father_name: String,
    pub mother_name: String,
    pub degree_years: i64,
    pub degree_months: i64,
    pub degree_type: String,
    pub graduation_year: i64,
    pub cgpa: f64,
    pub courses: Vec<Course>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting an academic record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAcademicRecord {
    pub user_id: i64,
    pub student_id: String,
    pub reg_no: String,
    pub session: String,
    pub department: String,
    pub father_name: String,
    pub mother_name: String,
    pub degree_years: i64,
    pub degree_months: i64,
    pub degree_type: String,
    pub graduation_year: i64,
    pub cgpa: f64,
    pub courses: Vec<Course>,
}

impl NewAcademicRecord {
    /// Create a record with the institutional defaults filled in.
    pub fn new(
        user_id: i64,
        student_id: impl Into<String>,
        reg_no: impl Into<String>,
        session: impl Into<String>,
        cgpa: f64,
    ) -> Self {
        Self {
            user_id,
            student_id: student_id.into(),
            reg_no: reg_no.into(),
            session: session.into(),
            department: DEFAULT_DEPARTMENT.to_string(),
            father_name: String::new(),
            mother_name: String::new(),
            degree_years: DEFAULT_DEGREE_YEARS,
            degree_months: 0,
            degree_type: DEFAULT_DEGREE_TYPE.to_string(),
            graduation_year: DEFAULT_GRADUATION_YEAR,
            cgpa,
            courses: Vec::new(),
        }
    }
}
