use crate::code::booking_code;
use estrella_catalog::{Route, TimeSlot};
use estrella_shared::DateKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ticket status. A single value today; cancellation deletes the ticket
/// instead of moving it to a terminal status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Confirmed,
}

impl TicketStatus {
    /// User-facing label, as printed on the ticket row.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Confirmed => "Confirmada",
        }
    }
}

/// A confirmed reservation, owned by exactly one user through containment
/// in that user's ticket collection. Reprogramming overwrites route, date
/// and time in place; `id` and `code` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub route: Route,
    pub date: DateKey,
    pub time: TimeSlot,
    pub status: TicketStatus,
    pub code: String,
}

impl Ticket {
    /// Convenience constructor using the default operator prefix. The
    /// store issues tickets through [`Ticket::with_code`] so a configured
    /// prefix reaches the code.
    pub fn new(route: Route, date: DateKey, time: TimeSlot) -> Self {
        Self::with_code(route, date, time, booking_code(crate::code::DEFAULT_PREFIX))
    }

    pub fn with_code(route: Route, date: DateKey, time: TimeSlot, code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            route,
            date,
            time,
            status: TicketStatus::Confirmed,
            code,
        }
    }

    /// Payload handed to the external QR renderer. Fully determined by the
    /// ticket; no further lookups needed.
    pub fn proof(&self) -> BoardingProof {
        BoardingProof {
            code: self.code.clone(),
            route: self.route.label().to_string(),
            date: self.date.display_dmy(),
            time: self.time.to_string(),
        }
    }
}

/// Display-ready record for the boarding QR code.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardingProof {
    pub code: String,
    pub route: String,
    pub date: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticket() -> Ticket {
        Ticket::new(
            Route::MercedesToCaba,
            "2026-09-15".parse().unwrap(),
            "09:00".parse().unwrap(),
        )
    }

    #[test]
    fn test_new_ticket_is_confirmed() {
        let ticket = sample_ticket();
        assert_eq!(ticket.status, TicketStatus::Confirmed);
        assert!(ticket.code.starts_with("ET-"));
    }

    #[test]
    fn test_proof_is_display_formatted() {
        let ticket = sample_ticket();
        let proof = ticket.proof();

        assert_eq!(proof.code, ticket.code);
        assert_eq!(proof.route, "Mercedes → CABA");
        assert_eq!(proof.date, "15/09/2026");
        assert_eq!(proof.time, "09:00");
    }

    #[test]
    fn test_ticket_serde_round_trip() {
        let ticket = sample_ticket();
        let json = serde_json::to_value(&ticket).unwrap();

        assert_eq!(json["route"], "M_BA");
        assert_eq!(json["date"], "2026-09-15");
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["status"], "CONFIRMED");

        let back: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }
}
