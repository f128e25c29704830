pub mod app_config;
pub mod gateway;
pub mod memory;

pub use app_config::AppConfig;
pub use gateway::{read_or_default, write_record, StorageGateway, StorageKey};
pub use memory::MemoryGateway;
