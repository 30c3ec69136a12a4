//! Meditation session enrollment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::{FormError, Notice, Outbox, SubmitError, Submission};
use crate::domain::ContentId;

/// A signed-in user's enrollment in one meditation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: String,
    pub session_id: ContentId,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Enrollment requires a signed-in user
    pub fn request(user_id: Option<&str>, session_id: ContentId) -> Result<Self, FormError> {
        let user_id = user_id
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(FormError::AuthenticationRequired)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            session_id,
            enrolled_at: Utc::now(),
        })
    }
}

/// Uniqueness key for a (user, session) pair (first 16 hex chars of SHA256)
pub fn enrollment_key(user_id: &str, session_id: &ContentId) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(b":");
    hasher.update(session_id.to_string().as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

/// Enroll the signed-in user in a session and report the outcome
pub async fn submit_enrollment(
    user_id: Option<&str>,
    session_id: ContentId,
    outbox: &dyn Outbox,
) -> Notice {
    let enrollment = match Enrollment::request(user_id, session_id) {
        Ok(enrollment) => enrollment,
        Err(_) => {
            return Notice::failure(
                "Authentication Required",
                "Please log in to enroll in meditation sessions.",
            )
        }
    };

    match outbox.deliver(&Submission::Enrollment(enrollment)).await {
        Ok(_) => Notice::success(
            "Enrollment Successful",
            "You have been enrolled in the meditation session.",
        ),
        Err(SubmitError::AlreadyEnrolled { .. }) => Notice::failure(
            "Already Enrolled",
            "You are already enrolled in this session.",
        ),
        Err(e) => {
            tracing::warn!("Enrollment failed: {}", e);
            Notice::failure(
                "Enrollment Failed",
                "There was an error enrolling you in the session.",
            )
        }
    }
}
