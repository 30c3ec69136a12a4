//! Form submissions: contact messages, donation pledges and meditation
//! enrollments.
//!
//! Each form validates into a record, the record is handed to an
//! [`Outbox`], and the outcome is reported back as a transient [`Notice`].
//! A failed submission leaves the form untouched.

pub mod contact;
pub mod donation;
pub mod enrollment;
pub mod outbox;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use contact::{submit_contact, ContactForm, ContactMessage, InquiryCategory};
pub use donation::{submit_donation, DonationForm, DonationRecord, PaymentStatus, QUICK_AMOUNTS};
pub use enrollment::{enrollment_key, submit_enrollment, Enrollment};
pub use outbox::{LogOutbox, MemoryOutbox, Outbox, Receipt, SubmitError};

/// Errors raised while validating a form
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be at least {minimum}, got {amount}")]
    AmountTooSmall { amount: f64, minimum: f64 },

    #[error("Unknown inquiry category: {0}")]
    UnknownCategory(String),

    #[error("Sign in required")]
    AuthenticationRequired,
}

/// Anything the site hands to an outbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Submission {
    Contact(ContactMessage),
    Donation(DonationRecord),
    Enrollment(Enrollment),
}

impl Submission {
    pub fn id(&self) -> Uuid {
        match self {
            Submission::Contact(m) => m.id,
            Submission::Donation(d) => d.id,
            Submission::Enrollment(e) => e.id,
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "contact",
            Submission::Donation(_) => "donation",
            Submission::Enrollment(_) => "enrollment",
        }
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        match self {
            Submission::Contact(m) => m.submitted_at,
            Submission::Donation(d) => d.created_at,
            Submission::Enrollment(e) => e.enrolled_at,
        }
    }
}

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Transient notification shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Trimmed, non-empty field value
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Loose `local@domain.tld` check, the same bar an email input applies
fn validate_email(value: &str) -> Result<String, FormError> {
    let email = required(value, "Email")?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(FormError::InvalidEmail(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Radha ", "Name").unwrap(), "Radha");
        assert_eq!(required("   ", "Name"), Err(FormError::MissingField("Name")));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("info@yogaformodernage.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(matches!(validate_email("no-at-sign"), Err(FormError::InvalidEmail(_))));
        assert!(matches!(validate_email("x@localhost"), Err(FormError::InvalidEmail(_))));
        assert!(matches!(validate_email("a b@c.com"), Err(FormError::InvalidEmail(_))));
        assert_eq!(validate_email(""), Err(FormError::MissingField("Email")));
    }

    #[test]
    fn test_notice_variants() {
        assert!(!Notice::success("Thank You!", "Recorded").is_failure());
        assert!(Notice::failure("Error", "Try again").is_failure());
        assert_eq!(Notice::success("A", "B").to_string(), "A: B");
    }
}
