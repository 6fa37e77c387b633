//! Wire types for the subset of the Telegram Bot API the bot uses.

use serde::{Deserialize, Serialize};

/// Envelope around every Bot API reply
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Body of `getUpdates`
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<String>,
}

/// Body of `sendMessage`
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub one_time_keyboard: bool,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
}

impl ReplyMarkup {
    /// One button per row, shown once
    pub fn one_time_keyboard<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReplyMarkup::Keyboard(ReplyKeyboardMarkup {
            keyboard: labels
                .into_iter()
                .map(|label| vec![KeyboardButton { text: label.into() }])
                .collect(),
            one_time_keyboard: true,
            resize_keyboard: true,
        })
    }

    pub fn remove() -> Self {
        ReplyMarkup::Remove(ReplyKeyboardRemove { remove_keyboard: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_update() {
        let raw = json!({
            "update_id": 10,
            "message": {
                "message_id": 5,
                "from": {"id": 77, "is_bot": false, "first_name": "Sam"},
                "chat": {"id": 77, "type": "private"},
                "date": 1700000000,
                "text": "/start"
            }
        });

        let update: Update = serde_json::from_value(raw).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.from.unwrap().id, 77);
        assert_eq!(message.text.as_deref(), Some("/start"));
    }

    #[test]
    fn test_parse_non_message_update() {
        let raw = json!({"update_id": 11, "edited_message": {"message_id": 1}});
        let update: Update = serde_json::from_value(raw).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_keyboard_serialization() {
        let markup = ReplyMarkup::one_time_keyboard(["Biology", "Other"]);
        let value = serde_json::to_value(&markup).unwrap();
        assert_eq!(
            value,
            json!({
                "keyboard": [[{"text": "Biology"}], [{"text": "Other"}]],
                "one_time_keyboard": true,
                "resize_keyboard": true
            })
        );

        let remove = serde_json::to_value(ReplyMarkup::remove()).unwrap();
        assert_eq!(remove, json!({"remove_keyboard": true}));
    }

    #[test]
    fn test_send_message_skips_empty_fields() {
        let request = SendMessageRequest {
            chat_id: 1,
            text: "hi".to_string(),
            parse_mode: None,
            reply_markup: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"chat_id": 1, "text": "hi"}));
    }
}
