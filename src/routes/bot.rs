use crate::core::{build_query, format_matches, prompts, transition, Effect, Event, Keyboard, MatchError, Matcher};
use crate::models::{Message, ReplyMarkup, Update, UserId};
use crate::services::{Dataset, SessionStore, TelegramClient};
use std::sync::Arc;
use std::time::Duration;

/// Long-poll settings for the update loop
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub timeout_secs: u64,
    /// Pause after a failed poll
    pub error_delay: Duration,
}

/// State shared by the message handlers
#[derive(Clone)]
pub struct BotState {
    pub telegram: Arc<TelegramClient>,
    pub sessions: Arc<SessionStore>,
    pub dataset: Arc<Dataset>,
    pub matcher: Matcher,
}

/// Map message text to a conversation event
///
/// Returns `None` for commands other than `/start` and `/cancel`.
pub fn parse_event(text: &str) -> Option<Event> {
    let text = text.trim();

    let Some(command) = text.strip_prefix('/') else {
        return Some(Event::Text(text.to_string()));
    };

    // "/start@SomeBot payload" -> "start"
    let name = command
        .split_whitespace()
        .next()
        .and_then(|word| word.split('@').next())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match name.as_str() {
        "start" => Some(Event::Start),
        "cancel" => Some(Event::Cancel),
        _ => None,
    }
}

fn reply_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Keep => None,
        Keyboard::MajorChoices => Some(ReplyMarkup::one_time_keyboard(prompts::major_keyboard_labels())),
        Keyboard::Remove => Some(ReplyMarkup::remove()),
    }
}

impl BotState {
    pub fn new(
        telegram: Arc<TelegramClient>,
        sessions: Arc<SessionStore>,
        dataset: Arc<Dataset>,
        matcher: Matcher,
    ) -> Self {
        Self {
            telegram,
            sessions,
            dataset,
            matcher,
        }
    }

    /// Poll for updates forever, handling each message to completion
    pub async fn run_polling(&self, settings: PollSettings) {
        let mut offset: Option<i64> = None;

        tracing::info!("Polling for updates (timeout: {}s)", settings.timeout_secs);

        loop {
            match self.telegram.get_updates(offset, settings.timeout_secs).await {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.handle_update(update).await;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch updates, retrying in {:?}: {}",
                        settings.error_delay,
                        e
                    );
                    tokio::time::sleep(settings.error_delay).await;
                }
            }
        }
    }

    pub async fn handle_update(&self, update: Update) {
        match update.message {
            Some(message) => self.handle_message(&message).await,
            None => tracing::trace!("Skipping update {} without a message", update.update_id),
        }
    }

    /// Drive one inbound message through the conversation
    pub async fn handle_message(&self, message: &Message) {
        let (Some(text), Some(from)) = (message.text.as_deref(), message.from.as_ref()) else {
            tracing::debug!("Ignoring message {} without text or sender", message.message_id);
            return;
        };

        let user_id = from.id;
        let chat_id = message.chat.id;

        let Some(event) = parse_event(text) else {
            tracing::debug!("Ignoring unknown command from user {}: {}", user_id, text);
            return;
        };

        let state = self.sessions.state(user_id).await;
        let result = match transition(state, event) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Ignoring message from user {} in {:?}: {}", user_id, state, e);
                return;
            }
        };

        tracing::debug!("User {}: {:?} -> {:?}", user_id, state, result.new_state);

        for effect in result.effects {
            self.execute(user_id, chat_id, effect).await;
        }

        self.sessions.set_state(user_id, result.new_state).await;
    }

    async fn execute(&self, user_id: UserId, chat_id: i64, effect: Effect) {
        match effect {
            Effect::StartSession => {
                self.sessions.create(user_id).await;
            }
            Effect::Record(answer) => {
                self.sessions.update(user_id, answer).await;
            }
            Effect::Reply { text, keyboard } => {
                self.send(chat_id, text, reply_markup(keyboard)).await;
            }
            Effect::FindMatches => {
                self.present_matches(user_id, chat_id).await;
            }
            Effect::EndSession => {
                self.sessions.delete(user_id).await;
            }
        }
    }

    async fn send(&self, chat_id: i64, text: &str, markup: Option<ReplyMarkup>) -> bool {
        match self.telegram.send_message(chat_id, text, markup).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to send message to chat {}: {}", chat_id, e);
                false
            }
        }
    }

    /// Run the lookup and send the result; any failure becomes a generic reply
    async fn present_matches(&self, user_id: UserId, chat_id: i64) {
        let reply = match self.lookup(user_id).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Lookup failed for user {}: {}", user_id, e);
                self.send(chat_id, prompts::LOOKUP_FAILED, Some(ReplyMarkup::remove())).await;
                return;
            }
        };

        if !self.send(chat_id, &reply, Some(ReplyMarkup::remove())).await {
            tracing::error!("Could not deliver results to user {}", user_id);
            self.send(chat_id, prompts::LOOKUP_FAILED, Some(ReplyMarkup::remove())).await;
        }
    }

    async fn lookup(&self, user_id: UserId) -> Result<String, MatchError> {
        let session = self
            .sessions
            .get(user_id)
            .await
            .ok_or(MatchError::Incomplete("session"))?;
        let query = build_query(&session)?;

        let result = self.matcher.find_matches(&self.dataset, &query);

        let elapsed = chrono::Utc::now() - session.started_at;
        tracing::info!(
            "Found {} of {} candidate universities for user {} (major: {:?}, gpa: {}, conversation: {}s)",
            result.matches.len(),
            result.total_candidates,
            user_id,
            query.major,
            query.grade_12_gpa,
            elapsed.num_seconds()
        );

        Ok(format_matches(&result))
    }
}
