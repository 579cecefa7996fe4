//! Certificate and testimonial types.
//!
//! Requests carry what the client submits. Contexts carry everything a
//! template needs except the images, which the renderer adds itself.

use serde::{Deserialize, Serialize};

use super::academic::{Course, DEFAULT_DEGREE_TYPE, DEFAULT_DEGREE_YEARS, DEFAULT_DEPARTMENT};

const DEFAULT_WORKS: &str = "Software Development and System Administration";
const DEFAULT_PRONOUN: &str = "He";
const DEFAULT_PREPARED_BY: &str = "Office Staff";
const DEFAULT_CHECKED_BY: &str = "Academic Coordinator";

fn default_department() -> String {
    DEFAULT_DEPARTMENT.to_string()
}

fn default_works() -> String {
    DEFAULT_WORKS.to_string()
}

fn default_pronoun() -> String {
    DEFAULT_PRONOUN.to_string()
}

const fn default_degree_years() -> i64 {
    DEFAULT_DEGREE_YEARS
}

fn default_degree_type() -> String {
    DEFAULT_DEGREE_TYPE.to_string()
}

fn default_prepared_by() -> String {
    DEFAULT_PREPARED_BY.to_string()
}

fn default_checked_by() -> String {
    DEFAULT_CHECKED_BY.to_string()
}

/// Client request to print a certificate against a paid transaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CertificateRequest {
    pub transaction_id: String,
    pub student_name: String,
    pub student_id: String,
    pub reg_no: String,
    pub session: String,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_works")]
    pub works: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Client request to print a testimonial against a paid transaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestimonialRequest {
    pub transaction_id: String,
    pub student_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub roll_no: String,
    pub reg_no: String,
    pub session: String,
    #[serde(default = "default_pronoun")]
    pub pronoun: String,
    #[serde(default = "default_degree_years")]
    pub degree_years: i64,
    #[serde(default)]
    pub degree_months: i64,
    #[serde(default = "default_degree_type")]
    pub degree_type: String,
    pub graduation_year: i64,
    pub cgpa: f64,
    #[serde(default = "default_prepared_by")]
    pub prepared_by: String,
    #[serde(default = "default_checked_by")]
    pub checked_by: String,
}

/// Template fields for a certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateContext {
    pub date: String,
    pub ref_no: String,
    pub student_name: String,
    pub student_id: String,
    pub reg_no: String,
    pub session: String,
    pub department: String,
    pub works: String,
    pub courses: Vec<Course>,
    /// URL encoded into the QR code.
    pub verify_url: String,
}

impl CertificateContext {
    pub fn from_request(request: CertificateRequest, date: String, verify_url: String) -> Self {
        Self {
            date,
            ref_no: request.transaction_id,
            student_name: request.student_name,
            student_id: request.student_id,
            reg_no: request.reg_no,
            session: request.session,
            department: request.department,
            works: request.works,
            courses: request.courses,
            verify_url,
        }
    }
}

/// Template fields for a testimonial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialContext {
    pub date: String,
    pub serial_no: String,
    pub student_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub roll_no: String,
    pub reg_no: String,
    pub session: String,
    pub pronoun: String,
    pub degree_years: i64,
    pub degree_months: i64,
    pub degree_type: String,
    pub graduation_year: i64,
    pub cgpa: f64,
    pub prepared_by: String,
    pub checked_by: String,
    /// URL encoded into the QR code.
    pub verify_url: String,
}

impl TestimonialContext {
    pub fn from_request(request: TestimonialRequest, date: String, verify_url: String) -> Self {
        Self {
            date,
            serial_no: request.transaction_id,
            student_name: request.student_name,
            father_name: request.father_name,
            mother_name: request.mother_name,
            roll_no: request.roll_no,
            reg_no: request.reg_no,
            session: request.session,
            pronoun: request.pronoun,
            degree_years: request.degree_years,
            degree_months: request.degree_months,
            degree_type: request.degree_type,
            graduation_year: request.graduation_year,
            cgpa: request.cgpa,
            prepared_by: request.prepared_by,
            checked_by: request.checked_by,
            verify_url,
        }
    }
}

/// Which printable layout to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Certificate,
    Testimonial,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Testimonial => "testimonial",
        }
    }

    /// Testimonials are printed landscape.
    pub const fn is_landscape(&self) -> bool {
        matches!(self, Self::Testimonial)
    }
}

/// A fully-populated document ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintableDocument {
    Certificate(CertificateContext),
    Testimonial(TestimonialContext),
}

impl PrintableDocument {
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Certificate(_) => DocumentKind::Certificate,
            Self::Testimonial(_) => DocumentKind::Testimonial,
        }
    }

    /// Reference number printed on the document.
    pub fn reference(&self) -> &str {
        match self {
            Self::Certificate(ctx) => &ctx.ref_no,
            Self::Testimonial(ctx) => &ctx.serial_no,
        }
    }

    pub fn verify_url(&self) -> &str {
        match self {
            Self::Certificate(ctx) => &ctx.verify_url,
            Self::Testimonial(ctx) => &ctx.verify_url,
        }
    }
}

/// Rendered PDF plus the attachment name to send it under.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(kind: DocumentKind, reference: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: format!("{}_{}.pdf", kind.as_str(), reference),
            bytes,
        }
    }
}
