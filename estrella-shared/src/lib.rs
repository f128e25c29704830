pub mod datekey;
pub mod pii;

pub use datekey::{DateKey, DateKeyError};
pub use pii::Secret;
