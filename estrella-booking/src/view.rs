use crate::workflow::{ReservationWorkflow, WorkflowStage};
use estrella_catalog::{Route, TimeSlot};
use estrella_shared::DateKey;
use estrella_ticket::Ticket;
use serde::Serialize;
use uuid::Uuid;

/// Everything the booking form needs to render one workflow state: the
/// valid slot list for the selected route, the current selections, and
/// whether confirmation is currently permitted.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub stage: WorkflowStage,
    pub route: Route,
    pub route_label: &'static str,
    pub available_slots: Vec<TimeSlot>,
    pub selected_date: Option<DateKey>,
    pub selected_time: Option<TimeSlot>,
    pub reprogramming: bool,
    pub can_confirm: bool,
}

impl ReservationWorkflow {
    pub fn view(&self) -> WorkflowView {
        WorkflowView {
            stage: self.stage(),
            route: self.route(),
            route_label: self.route().label(),
            available_slots: self.available_slots(),
            selected_date: self.selected_date(),
            selected_time: self.selected_time(),
            reprogramming: self.is_reprogramming(),
            can_confirm: self.can_confirm(),
        }
    }
}

/// Display-ready row for the ticket list, with the two actions the UI can
/// offer on it. Both are always available on a Confirmed ticket; refund
/// eligibility only changes the cancellation message, never the action.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    pub id: Uuid,
    pub code: String,
    pub route_label: &'static str,
    pub date: String,
    pub time: String,
    pub status: &'static str,
    pub can_cancel: bool,
    pub can_reprogram: bool,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            code: ticket.code.clone(),
            route_label: ticket.route.label(),
            date: ticket.date.display_dmy(),
            time: ticket.time.to_string(),
            status: ticket.status.label(),
            can_cancel: true,
            can_reprogram: true,
        }
    }
}
