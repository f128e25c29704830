pub mod code;
pub mod models;
pub mod refund;
pub mod store;

pub use models::{BoardingProof, Ticket, TicketStatus};
pub use refund::{departure_instant, RefundPolicy};
pub use store::{TicketError, TicketPatch, TicketStore};
