// Model exports
pub mod domain;
pub mod telegram;

pub use domain::{Answer, ConversationState, GpaRequirement, IntakeSession, MatchQuery, SatScore, UniversityRecord, UserId};
pub use telegram::{ApiResponse, Chat, GetUpdatesRequest, Message, ReplyMarkup, SendMessageRequest, Update, User};
