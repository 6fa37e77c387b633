use crate::models::{Answer, ConversationState, IntakeSession, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory intake sessions keyed by user id
///
/// Lives for the whole process. At most one session exists per user; a new
/// conversation replaces the previous one.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, IntakeSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session, dropping any unfinished one
    pub async fn create(&self, user_id: UserId) -> IntakeSession {
        let session = IntakeSession::new(user_id);
        let previous = self
            .sessions
            .write()
            .await
            .insert(user_id, session.clone());

        if previous.is_some() {
            tracing::debug!("Replaced unfinished session for user {}", user_id);
        }
        session
    }

    pub async fn get(&self, user_id: UserId) -> Option<IntakeSession> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Current conversation state; `End` when there is no session
    pub async fn state(&self, user_id: UserId) -> ConversationState {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .map(|s| s.state)
            .unwrap_or(ConversationState::End)
    }

    /// Store an answer. Does nothing if the user has no session.
    pub async fn update(&self, user_id: UserId, answer: Answer) {
        match self.sessions.write().await.get_mut(&user_id) {
            Some(session) => session.apply(answer),
            None => tracing::warn!("Dropping answer for user {} without a session", user_id),
        }
    }

    /// Move the session to `state`. Does nothing if the user has no session.
    pub async fn set_state(&self, user_id: UserId, state: ConversationState) {
        if let Some(session) = self.sessions.write().await.get_mut(&user_id) {
            session.state = state;
        }
    }

    pub async fn delete(&self, user_id: UserId) -> Option<IntakeSession> {
        self.sessions.write().await.remove(&user_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
