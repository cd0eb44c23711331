//! Client-side application form. Unlike the server, which stops at the first
//! problem, the form reports every field that needs attention at once.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::applications::validation::{is_valid_email, MIN_COVER_LETTER_CHARS};
use crate::applications::ApplicationPayload;
use crate::catalog::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    CoverLetter,
    Resume,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    /// Name of the chosen resume file; its contents are never read.
    pub resume_file_name: Option<String>,
}

impl ApplicationForm {
    pub fn validate(&self) -> BTreeMap<FormField, String> {
        let mut errors = BTreeMap::new();

        if self.first_name.trim().is_empty() {
            errors.insert(FormField::FirstName, "First name is required".to_string());
        }

        if self.last_name.trim().is_empty() {
            errors.insert(FormField::LastName, "Last name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.insert(FormField::Email, "Email is invalid".to_string());
        }

        if self.phone.trim().is_empty() {
            errors.insert(FormField::Phone, "Phone number is required".to_string());
        }

        let cover_letter = self.cover_letter.trim();
        if cover_letter.is_empty() {
            errors.insert(FormField::CoverLetter, "Cover letter is required".to_string());
        } else if cover_letter.chars().count() < MIN_COVER_LETTER_CHARS {
            errors.insert(
                FormField::CoverLetter,
                format!("Cover letter must be at least {MIN_COVER_LETTER_CHARS} characters"),
            );
        }

        if let Some(name) = &self.resume_file_name {
            if !name.to_ascii_lowercase().ends_with(".pdf") {
                errors.insert(FormField::Resume, "Please upload a PDF file".to_string());
            }
        }

        errors
    }

    /// Request body for `job`, including the job's title and company for display.
    pub fn into_payload(self, job: &Job) -> ApplicationPayload {
        let mut extra = Map::new();
        extra.insert("jobTitle".to_string(), Value::String(job.title.clone()));
        extra.insert("company".to_string(), Value::String(job.company.clone()));

        ApplicationPayload {
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            phone: Some(self.phone),
            cover_letter: Some(self.cover_letter),
            job_id: Some(job.id.to_string()),
            resume_file_name: self.resume_file_name,
            extra,
        }
    }
}
