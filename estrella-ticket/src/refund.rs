use crate::models::Ticket;
use chrono::{Duration, NaiveDateTime};
use estrella_store::app_config::BusinessRules;

/// The ticket's scheduled departure in local civil time.
pub fn departure_instant(ticket: &Ticket) -> NaiveDateTime {
    ticket.date.date().and_time(ticket.time.time())
}

/// Refund eligibility for cancellations. Informational only: cancellation
/// always proceeds once confirmed, the policy merely decides which message
/// the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundPolicy {
    pub window_hours: i64,
}

impl Default for RefundPolicy {
    fn default() -> Self {
        Self { window_hours: 24 }
    }
}

impl RefundPolicy {
    pub fn from_config(rules: &BusinessRules) -> Self {
        Self {
            window_hours: rules.refund_window_hours,
        }
    }

    /// Refundable iff at least the full window remains before departure.
    /// The boundary is inclusive: exactly `window_hours` ahead still
    /// qualifies.
    pub fn is_refundable(&self, ticket: &Ticket, now: NaiveDateTime) -> bool {
        departure_instant(ticket) - now >= Duration::hours(self.window_hours)
    }
}
