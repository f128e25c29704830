pub mod route;
pub mod slots;

pub use route::{HoursRule, Route};
pub use slots::{generate_slots, SlotError, TimeSlot};
