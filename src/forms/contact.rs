//! Contact page form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{required, validate_email, FormError, Notice, Outbox, Submission};

/// Topic picked in the contact form's select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryCategory {
    General,
    Courses,
    Events,
    Books,
    Media,
    Donations,
    Technical,
}

impl InquiryCategory {
    pub const ALL: [InquiryCategory; 7] = [
        InquiryCategory::General,
        InquiryCategory::Courses,
        InquiryCategory::Events,
        InquiryCategory::Books,
        InquiryCategory::Media,
        InquiryCategory::Donations,
        InquiryCategory::Technical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryCategory::General => "General Inquiry",
            InquiryCategory::Courses => "Courses & Learning",
            InquiryCategory::Events => "Events & Workshops",
            InquiryCategory::Books => "Books & Publications",
            InquiryCategory::Media => "Media & Content",
            InquiryCategory::Donations => "Donations & Support",
            InquiryCategory::Technical => "Technical Support",
        }
    }
}

impl fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            InquiryCategory::General => "general",
            InquiryCategory::Courses => "courses",
            InquiryCategory::Events => "events",
            InquiryCategory::Books => "books",
            InquiryCategory::Media => "media",
            InquiryCategory::Donations => "donations",
            InquiryCategory::Technical => "technical",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for InquiryCategory {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| FormError::UnknownCategory(s.to_string()))
    }
}

/// Raw contact form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub category: Option<InquiryCategory>,
    pub message: String,
}

/// A validated contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<InquiryCategory>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactForm {
    /// Check required fields and email shape
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        Ok(ContactMessage {
            id: Uuid::new_v4(),
            name: required(&self.name, "Name")?,
            email: validate_email(&self.email)?,
            subject: required(&self.subject, "Subject")?,
            category: self.category,
            message: required(&self.message, "Message")?,
            submitted_at: Utc::now(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate and deliver a contact message; clears the form on success
pub async fn submit_contact(form: &mut ContactForm, outbox: &dyn Outbox) -> Notice {
    let message = match form.validate() {
        Ok(message) => message,
        Err(e) => return Notice::failure("Check the form", e.to_string()),
    };

    match outbox.deliver(&Submission::Contact(message)).await {
        Ok(_) => {
            form.reset();
            Notice::success("Message Sent", "Thank you for reaching out. We'll get back to you soon.")
        }
        Err(e) => {
            tracing::warn!("Failed to deliver contact message: {}", e);
            Notice::failure("Error", "Your message could not be sent. Please try again.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Radha".to_string(),
            email: "radha@example.org".to_string(),
            subject: "Course question".to_string(),
            category: Some(InquiryCategory::Courses),
            message: "When does the next Gita course start?".to_string(),
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("events".parse::<InquiryCategory>().unwrap(), InquiryCategory::Events);
        assert_eq!(" Technical ".parse::<InquiryCategory>().unwrap(), InquiryCategory::Technical);
        assert!("astrology".parse::<InquiryCategory>().is_err());
        assert_eq!(InquiryCategory::Donations.label(), "Donations & Support");
    }

    #[test]
    fn test_validate_filled_form() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Radha");
        assert_eq!(message.category, Some(InquiryCategory::Courses));
    }

    #[test]
    fn test_category_is_optional() {
        let form = ContactForm {
            category: None,
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_subject() {
        let form = ContactForm {
            subject: String::new(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingField("Subject"));
    }
}
