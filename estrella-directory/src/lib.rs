pub mod directory;
pub mod models;

pub use directory::{AccountDirectory, DirectoryError};
pub use models::{Session, User};
