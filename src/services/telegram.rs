use crate::models::{ApiResponse, GetUpdatesRequest, ReplyMarkup, SendMessageRequest, Update};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Extra time on top of the long-poll timeout before the HTTP call gives up
const REQUEST_GRACE_SECS: u64 = 10;

/// Errors that can occur when talking to the Bot API
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    RequestError(reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the bot token
        TelegramError::RequestError(err.without_url())
    }
}

/// Telegram Bot API client
///
/// Handles the two calls the bot needs:
/// - Long polling for new messages
/// - Sending replies with optional reply keyboards
pub struct TelegramClient {
    base_url: String,
    token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a new client. `poll_timeout_secs` bounds the long-poll wait.
    pub fn new(
        base_url: String,
        token: String,
        poll_timeout_secs: u64,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + REQUEST_GRACE_SECS))
            .build()?;

        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            method
        )
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // Errors come back as non-2xx with the same JSON envelope
        let envelope: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            TelegramError::InvalidResponse(format!("{} returned {}: {}", method, status, e))
        })?;

        if !envelope.ok {
            return Err(TelegramError::ApiError(format!(
                "{} failed ({}): {}",
                method,
                status,
                envelope.description.unwrap_or_else(|| "no description".to_string())
            )));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::InvalidResponse(format!("{} returned no result", method)))
    }

    /// Long-poll for message updates after `offset`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message".to_string()],
        };

        let updates: Vec<Update> = self.call("getUpdates", &request).await?;
        tracing::trace!("Received {} updates", updates.len());
        Ok(updates)
    }

    /// Send a Markdown message to a chat
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
            parse_mode: Some("Markdown".to_string()),
            reply_markup,
        };

        let _: serde_json::Value = self.call("sendMessage", &request).await?;
        tracing::debug!("Sent message to chat {}", chat_id);
        Ok(())
    }
}
