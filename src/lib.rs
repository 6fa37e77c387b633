//! Uni Finder - conversational university finder bot
//!
//! Collects grades, an IELTS score, an SAT score and an intended major over a
//! Telegram conversation, then looks up matching universities in a static
//! CSV dataset. A separate HTTP listener answers uptime pings.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{transition, Effect, Event, MatchResult, Matcher};
pub use models::{ConversationState, GpaRequirement, IntakeSession, MatchQuery, UniversityRecord};
pub use services::{Dataset, SessionStore, TelegramClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = transition(ConversationState::End, Event::Start).unwrap();
        assert_eq!(result.new_state, ConversationState::Grade10);
    }
}
