// Service exports
pub mod dataset;
pub mod sessions;
pub mod telegram;

pub use dataset::{Dataset, DatasetError};
pub use sessions::SessionStore;
pub use telegram::{TelegramClient, TelegramError};
