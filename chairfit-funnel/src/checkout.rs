use std::time::Duration;

use async_trait::async_trait;
use chairfit_model::profile::Plan;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Deserialize;
use tokio::time;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("missing payment field: {0}")]
    MissingField(&'static str),
    #[error("payment declined")]
    Declined,
}

type Result<T> = std::result::Result<T, CheckoutError>;

/// Card form as typed by the user. Only presence of each field is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentDetails {
    pub name: String,
    pub email: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn validate(&self) -> Result<()> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("card number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(CheckoutError::MissingField(field)))
    }

    /// Card number with everything but the last four digits hidden.
    pub fn masked_card(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {}", last_four)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub plan: Plan,
    pub amount_cents: u32,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub reference: Uuid,
    pub order: Order,
    pub paid_at: DateTime<Utc>,
}

#[mockall::automock]
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(&self, order: &Order, payment: &PaymentDetails) -> Result<Receipt>;
}

/// Accepts every payment after a fixed delay. No card data leaves the process.
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn charge(&self, order: &Order, payment: &PaymentDetails) -> Result<Receipt> {
        info!(
            "Processing {:?} payment of {} cents with card {}",
            order.plan,
            order.amount_cents,
            payment.masked_card()
        );
        time::sleep(self.delay).await;

        let receipt = Receipt {
            reference: Uuid::new_v4(),
            order: order.clone(),
            paid_at: Utc::now(),
        };
        debug!("Payment accepted, reference {}", receipt.reference);
        Ok(receipt)
    }
}
