use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Succeeded,
}

/// Record of the (simulated) payment step. Real payment processing is out
/// of scope; confirming a reservation settles instantly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub reference: String,
    pub status: PaymentStatus,
    pub confirmed_at: NaiveDateTime,
}

/// The stand-in for the external payment flow: always succeeds, instantly.
pub fn simulate_confirmation() -> PaymentConfirmation {
    let confirmation = PaymentConfirmation {
        reference: format!("sim-{}", Uuid::new_v4()),
        status: PaymentStatus::Succeeded,
        confirmed_at: Local::now().naive_local(),
    };
    tracing::info!("Payment confirmed (simulated): {}", confirmation.reference);
    confirmation
}
