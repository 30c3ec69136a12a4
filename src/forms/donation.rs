//! Donation page form.
//!
//! A donation is only recorded as a pledge with `pending` payment status;
//! no payment is ever taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{required, validate_email, FormError, Notice, Outbox, Submission};

/// Preset buttons above the amount field
pub const QUICK_AMOUNTS: [u32; 5] = [25, 50, 100, 250, 500];

/// Smallest accepted donation
pub const MINIMUM_AMOUNT: f64 = 1.0;

/// Payment state of a recorded pledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
}

/// Raw donation form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub amount: String,
    pub donor_name: String,
    pub donor_email: String,
    pub message: String,
}

/// A validated donation pledge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: Uuid,
    /// Signed-in user, if any
    pub user_id: Option<String>,
    pub donor_name: String,
    pub donor_email: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Parse a decimal amount, rounded to cents
fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let raw = required(raw, "Amount")?;
    let amount: f64 = raw
        .trim_start_matches('$')
        .parse()
        .map_err(|_| FormError::InvalidAmount(raw.clone()))?;

    if !amount.is_finite() {
        return Err(FormError::InvalidAmount(raw));
    }

    let amount = (amount * 100.0).round() / 100.0;
    if amount < MINIMUM_AMOUNT {
        return Err(FormError::AmountTooSmall {
            amount,
            minimum: MINIMUM_AMOUNT,
        });
    }
    Ok(amount)
}

impl DonationForm {
    /// Fill the amount from a preset button
    pub fn choose_quick_amount(&mut self, amount: u32) {
        self.amount = amount.to_string();
    }

    /// Whether a preset button is the current selection
    pub fn is_quick_amount_selected(&self, amount: u32) -> bool {
        self.amount == amount.to_string()
    }

    /// Submit button text, e.g. "Donate $50"
    pub fn button_label(&self) -> String {
        let amount = if self.amount.trim().is_empty() {
            "0"
        } else {
            self.amount.trim()
        };
        format!("Donate ${}", amount)
    }

    /// Check the amount, name and email
    pub fn validate(&self, user_id: Option<&str>) -> Result<DonationRecord, FormError> {
        let amount = parse_amount(&self.amount)?;
        let donor_name = required(&self.donor_name, "Name")?;
        let donor_email = validate_email(&self.donor_email)?;
        let message = Some(self.message.trim().to_string()).filter(|m| !m.is_empty());

        Ok(DonationRecord {
            id: Uuid::new_v4(),
            user_id: user_id.map(str::to_string),
            donor_name,
            donor_email,
            amount,
            message,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate and record a donation pledge.
///
/// The form is cleared only when the pledge was recorded.
pub async fn submit_donation(
    form: &mut DonationForm,
    user_id: Option<&str>,
    outbox: &dyn Outbox,
) -> Notice {
    let record = match form.validate(user_id) {
        Ok(record) => record,
        Err(e) => return Notice::failure("Check the form", e.to_string()),
    };

    match outbox.deliver(&Submission::Donation(record)).await {
        Ok(receipt) => {
            tracing::info!(id = %receipt.submission_id, "Donation pledge recorded");
            form.reset();
            Notice::success(
                "Thank You!",
                "Your donation has been recorded. You will be redirected to payment processing.",
            )
        }
        Err(e) => {
            tracing::error!("Error processing donation: {}", e);
            Notice::failure(
                "Error",
                "There was an error processing your donation. Please try again.",
            )
        }
    }
}
