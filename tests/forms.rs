//! Form submission outcomes.

use async_trait::async_trait;
use vedic_wisdom::domain::ContentId;
use vedic_wisdom::forms::{
    submit_contact, submit_donation, submit_enrollment, ContactForm, DonationForm,
    InquiryCategory, MemoryOutbox, Outbox, PaymentStatus, Receipt, SubmitError, Submission,
};

/// Outbox that refuses everything
struct FailingOutbox;

#[async_trait]
impl Outbox for FailingOutbox {
    fn name(&self) -> &str {
        "failing"
    }

    async fn deliver(&self, _submission: &Submission) -> Result<Receipt, SubmitError> {
        Err(SubmitError::Rejected("backend unavailable".to_string()))
    }
}

fn donation_form() -> DonationForm {
    DonationForm {
        amount: "50".to_string(),
        donor_name: "Govinda".to_string(),
        donor_email: "govinda@example.org".to_string(),
        message: "For the temple library".to_string(),
    }
}

#[tokio::test]
async fn test_donation_success_resets_form() {
    let outbox = MemoryOutbox::new();
    let mut form = donation_form();

    let notice = submit_donation(&mut form, Some("user-1"), &outbox).await;

    assert_eq!(notice.title, "Thank You!");
    assert!(!notice.is_failure());
    assert_eq!(form, DonationForm::default());

    let submissions = outbox.submissions().await;
    assert_eq!(submissions.len(), 1);
    match &submissions[0] {
        Submission::Donation(record) => {
            assert_eq!(record.amount, 50.0);
            assert_eq!(record.payment_status, PaymentStatus::Pending);
            assert_eq!(record.message.as_deref(), Some("For the temple library"));
        }
        other => panic!("unexpected submission: {:?}", other),
    }
}

#[tokio::test]
async fn test_donation_failure_keeps_form() {
    let mut form = donation_form();

    let notice = submit_donation(&mut form, None, &FailingOutbox).await;

    assert_eq!(notice.title, "Error");
    assert!(notice.is_failure());
    assert_eq!(form, donation_form());
}

#[tokio::test]
async fn test_donation_invalid_amount_not_delivered() {
    let outbox = MemoryOutbox::new();
    let mut form = DonationForm {
        amount: "0.50".to_string(),
        ..donation_form()
    };

    let notice = submit_donation(&mut form, None, &outbox).await;

    assert!(notice.is_failure());
    assert!(outbox.is_empty().await);
    assert_eq!(form.amount, "0.50");
}

#[tokio::test]
async fn test_enrollment_outcomes() {
    let outbox = MemoryOutbox::new();
    let session = ContentId::from(2);

    let notice = submit_enrollment(None, session.clone(), &outbox).await;
    assert_eq!(notice.title, "Authentication Required");
    assert!(notice.is_failure());

    let notice = submit_enrollment(Some("user-1"), session.clone(), &outbox).await;
    assert_eq!(notice.title, "Enrollment Successful");

    let notice = submit_enrollment(Some("user-1"), session.clone(), &outbox).await;
    assert_eq!(notice.title, "Already Enrolled");
    assert_eq!(notice.description, "You are already enrolled in this session.");

    let notice = submit_enrollment(Some("user-1"), session, &FailingOutbox).await;
    assert_eq!(notice.title, "Enrollment Failed");

    assert_eq!(outbox.len().await, 1);
}

#[tokio::test]
async fn test_contact_submission() {
    let outbox = MemoryOutbox::new();
    let mut form = ContactForm {
        name: "Radha".to_string(),
        email: "radha@example.org".to_string(),
        subject: "Kirtan schedule".to_string(),
        category: Some("events".parse::<InquiryCategory>().unwrap()),
        message: "Is there a kirtan this weekend?".to_string(),
    };

    let notice = submit_contact(&mut form, &outbox).await;
    assert!(!notice.is_failure());
    assert_eq!(form, ContactForm::default());

    let submissions = outbox.submissions().await;
    assert_eq!(submissions[0].kind(), "contact");

    let mut invalid = ContactForm {
        email: "not-an-email".to_string(),
        ..ContactForm::default()
    };
    let notice = submit_contact(&mut invalid, &outbox).await;
    assert!(notice.is_failure());
    assert_eq!(outbox.len().await, 1);
}

#[test]
fn test_submission_json_is_tagged() {
    let enrollment = vedic_wisdom::forms::Enrollment::request(Some("user-1"), ContentId::from(3)).unwrap();
    let json = serde_json::to_value(Submission::Enrollment(enrollment)).unwrap();

    assert_eq!(json["type"], "enrollment");
    assert_eq!(json["session_id"], 3);
    assert_eq!(json["user_id"], "user-1");
}
