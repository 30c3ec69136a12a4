//! Destinations for form submissions.
//!
//! The site never processed submissions itself: contact messages were only
//! logged and donations/enrollments were single row inserts. [`LogOutbox`]
//! keeps the logging behavior; [`MemoryOutbox`] keeps submissions in memory
//! and enforces the one-enrollment-per-session rule.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::enrollment::enrollment_key;
use super::Submission;
use crate::domain::ContentId;

/// Errors that can occur while delivering a submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("User {user_id} is already enrolled in session {session_id}")]
    AlreadyEnrolled {
        user_id: String,
        session_id: ContentId,
    },

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Acknowledgement of a delivered submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub submission_id: Uuid,
    pub delivered_at: DateTime<Utc>,
}

impl Receipt {
    fn for_submission(submission: &Submission) -> Self {
        Self {
            submission_id: submission.id(),
            delivered_at: Utc::now(),
        }
    }
}

/// Trait for submission destinations
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Human-readable outbox name
    fn name(&self) -> &str;

    /// Deliver one submission
    async fn deliver(&self, submission: &Submission) -> Result<Receipt, SubmitError>;
}

/// Writes each submission as a structured log event
#[derive(Debug, Default, Clone)]
pub struct LogOutbox;

impl LogOutbox {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Outbox for LogOutbox {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(
            kind = submission.kind(),
            id = %submission.id(),
            %payload,
            "Submission received"
        );
        Ok(Receipt::for_submission(submission))
    }
}

/// Keeps submissions in memory, rejecting duplicate enrollments
#[derive(Debug, Default)]
pub struct MemoryOutbox {
    submissions: Mutex<Vec<Submission>>,
    enrollments: Mutex<HashSet<String>>,
}

impl MemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first
    pub async fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.submissions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.lock().await.is_empty()
    }
}

#[async_trait]
impl Outbox for MemoryOutbox {
    fn name(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        if let Submission::Enrollment(enrollment) = submission {
            let key = enrollment_key(&enrollment.user_id, &enrollment.session_id);
            let mut enrollments = self.enrollments.lock().await;
            if !enrollments.insert(key) {
                tracing::debug!(user = %enrollment.user_id, session = %enrollment.session_id, "Duplicate enrollment");
                return Err(SubmitError::AlreadyEnrolled {
                    user_id: enrollment.user_id.clone(),
                    session_id: enrollment.session_id.clone(),
                });
            }
        }

        self.submissions.lock().await.push(submission.clone());
        Ok(Receipt::for_submission(submission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Enrollment;

    #[tokio::test]
    async fn test_log_outbox_acknowledges() {
        let enrollment = Enrollment::request(Some("user-1"), ContentId::from(3)).unwrap();
        let submission = Submission::Enrollment(enrollment);
        let receipt = LogOutbox::new().deliver(&submission).await.unwrap();
        assert_eq!(receipt.submission_id, submission.id());
    }

    #[tokio::test]
    async fn test_memory_outbox_rejects_duplicate_enrollment() {
        let outbox = MemoryOutbox::new();
        let first = Enrollment::request(Some("user-1"), ContentId::from(3)).unwrap();
        let second = Enrollment::request(Some("user-1"), ContentId::from(3)).unwrap();
        let other = Enrollment::request(Some("user-2"), ContentId::from(3)).unwrap();

        outbox.deliver(&Submission::Enrollment(first)).await.unwrap();
        let err = outbox
            .deliver(&Submission::Enrollment(second))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::AlreadyEnrolled { .. }));
        outbox.deliver(&Submission::Enrollment(other)).await.unwrap();

        assert_eq!(outbox.len().await, 2);
    }
}
