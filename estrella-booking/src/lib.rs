pub mod calendar;
pub mod payment;
pub mod view;
pub mod workflow;

pub use calendar::{CalendarDay, CalendarMonth, WEEKDAYS};
pub use payment::{PaymentConfirmation, PaymentStatus};
pub use view::{TicketView, WorkflowView};
pub use workflow::{ReservationConfirmed, ReservationWorkflow, WorkflowError, WorkflowStage};
