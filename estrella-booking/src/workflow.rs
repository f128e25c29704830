use crate::payment::{self, PaymentConfirmation};
use estrella_catalog::{generate_slots, Route, TimeSlot};
use estrella_directory::Session;
use estrella_shared::DateKey;
use estrella_store::StorageGateway;
use estrella_ticket::{Ticket, TicketError, TicketPatch, TicketStore};
use uuid::Uuid;

/// Where the interaction currently stands. The stage is always the first
/// selection still missing; the booking form lets the traveler revisit
/// earlier choices at any point, so this is not a strict ratchet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum WorkflowStage {
    ChoosingRoute,
    ChoosingDate,
    ChoosingTime,
    Ready,
}

/// One reservation (or reprogram) interaction, from route selection to
/// confirmation. Lives exactly as long as the user's interaction with it:
/// confirming consumes the instance, abandoning it persists nothing.
#[derive(Debug, Clone)]
pub struct ReservationWorkflow {
    reprogramming: Option<Uuid>,
    stage: WorkflowStage,
    route: Route,
    date: Option<DateKey>,
    time: Option<TimeSlot>,
}

impl ReservationWorkflow {
    /// Fresh reservation, seeded with the first route preselected the way
    /// the booking form preselects it.
    pub fn new() -> Self {
        Self {
            reprogramming: None,
            stage: WorkflowStage::ChoosingRoute,
            route: Route::MercedesToCaba,
            date: None,
            time: None,
        }
    }

    /// Reprogram entry mode: seeded with the existing ticket's selections.
    /// Confirming will overwrite that ticket in place instead of creating
    /// a new one.
    pub fn reprogram(ticket: &Ticket) -> Self {
        Self {
            reprogramming: Some(ticket.id),
            stage: WorkflowStage::Ready,
            route: ticket.route,
            date: Some(ticket.date),
            time: Some(ticket.time),
        }
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn selected_date(&self) -> Option<DateKey> {
        self.date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn is_reprogramming(&self) -> bool {
        self.reprogramming.is_some()
    }

    /// The slot list currently offered, derived from the selected route.
    pub fn available_slots(&self) -> Vec<TimeSlot> {
        generate_slots(self.route)
    }

    pub fn can_confirm(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Change the route. The slot list is re-derived; a previously selected
    /// time that the new route does not offer is cleared.
    pub fn select_route(&mut self, route: Route) {
        self.route = route;
        if let Some(time) = self.time {
            if !generate_slots(route).contains(&time) {
                self.time = None;
            }
        }
        self.advance_stage();
    }

    /// Pick a calendar date. Dates strictly before `today` are rejected
    /// without any state change.
    pub fn select_date(&mut self, date: DateKey, today: DateKey) -> Result<(), WorkflowError> {
        if date.is_before(&today) {
            return Err(WorkflowError::PastDateSelected(date));
        }
        self.date = Some(date);
        self.advance_stage();
        Ok(())
    }

    /// Pick a departure time. Only slots the current route actually offers
    /// are accepted, which is what keeps every ticket's time producible by
    /// the slot generator.
    pub fn select_time(&mut self, time: TimeSlot) -> Result<(), WorkflowError> {
        if !generate_slots(self.route).contains(&time) {
            return Err(WorkflowError::SlotUnavailable(time));
        }
        self.time = Some(time);
        self.advance_stage();
        Ok(())
    }

    /// Confirm the reservation. Requires a complete selection; runs the
    /// simulated payment step, then creates the ticket, or in reprogram
    /// mode overwrites the existing one. A ticket that vanished between
    /// load and save is a data-integrity failure and propagates.
    pub fn confirm<G>(
        self,
        gateway: &mut G,
        store: &TicketStore,
        session: &Session,
    ) -> Result<ReservationConfirmed, WorkflowError>
    where
        G: StorageGateway + ?Sized,
    {
        let (date, time) = match (self.date, self.time) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(WorkflowError::IncompleteSelection),
        };

        let payment = payment::simulate_confirmation();

        let ticket = match self.reprogramming {
            Some(ticket_id) => store
                .replace(
                    gateway,
                    session.user_id,
                    ticket_id,
                    TicketPatch {
                        route: self.route,
                        date,
                        time,
                    },
                )
                .map_err(|err| match err {
                    TicketError::NotFound(id) => WorkflowError::TicketVanished(id),
                })?,
            None => store.create(gateway, session.user_id, self.route, date, time),
        };

        tracing::info!(
            "Reservation confirmed for {}: {} {} {}",
            session.login,
            ticket.code,
            ticket.date,
            ticket.time
        );

        Ok(ReservationConfirmed { ticket, payment })
    }

    fn advance_stage(&mut self) {
        self.stage = if self.date.is_none() {
            WorkflowStage::ChoosingDate
        } else if self.time.is_none() {
            WorkflowStage::ChoosingTime
        } else {
            WorkflowStage::Ready
        };
    }
}

impl Default for ReservationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a confirmed workflow. The workflow instance itself is gone;
/// starting over means constructing a new one.
#[derive(Debug, Clone)]
pub struct ReservationConfirmed {
    pub ticket: Ticket,
    pub payment: PaymentConfirmation,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Date and time must both be selected before confirming")]
    IncompleteSelection,

    #[error("Date is in the past: {0}")]
    PastDateSelected(DateKey),

    #[error("Slot not offered on this route: {0}")]
    SlotUnavailable(TimeSlot),

    #[error("Ticket disappeared while reprogramming: {0}")]
    TicketVanished(Uuid),
}
