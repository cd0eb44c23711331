use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::models::ApplicationPayload;
use crate::errors::AppError;

pub const MIN_COVER_LETTER_CHARS: usize = 50;

/// The first rule an application broke. `Display` is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Cover letter must be at least {} characters", MIN_COVER_LETTER_CHARS)]
    CoverLetterTooShort,
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Shape check only (`local@domain.tld`), not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Missing(field)),
    }
}

/// Checks required fields in declared order, then email shape, then cover
/// letter length. Stops at the first violation.
pub fn validate_application(payload: &ApplicationPayload) -> Result<(), ValidationError> {
    required(payload.first_name.as_deref(), "firstName")?;
    required(payload.last_name.as_deref(), "lastName")?;
    let email = required(payload.email.as_deref(), "email")?;
    required(payload.phone.as_deref(), "phone")?;
    let cover_letter = required(payload.cover_letter.as_deref(), "coverLetter")?;
    required(payload.job_id.as_deref(), "jobId")?;

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    // `required` already trimmed
    if cover_letter.chars().count() < MIN_COVER_LETTER_CHARS {
        return Err(ValidationError::CoverLetterTooShort);
    }

    Ok(())
}
