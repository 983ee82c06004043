//! Telegram Bot API payload types.
//!
//! Only the fields this bot actually reads are modeled; everything else in
//! the API payload is ignored on deserialization.

use serde::Deserialize;

/// One incoming update from `getUpdates`.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// An incoming chat message.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

/// The conversation a message belongs to.
#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Standard Bot API envelope: `{"ok": bool, "result": ..., "description": ...}`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_update_with_text() {
        let json = r#"{
            "update_id": 901,
            "message": {
                "message_id": 5,
                "from": {"id": 11, "is_bot": false, "first_name": "A"},
                "chat": {"id": -42, "type": "group"},
                "date": 1730000000,
                "text": "/startgame"
            }
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 901);
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, -42);
        assert_eq!(message.text.as_deref(), Some("/startgame"));
    }

    #[test]
    fn test_deserialize_update_without_message() {
        // Edited messages, joins etc. arrive without a `message` field.
        let update: Update = serde_json::from_str(r#"{"update_id": 902}"#).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{"ok": false, "description": "Unauthorized"}"#;
        let resp: ApiResponse<Vec<Update>> = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
        assert!(resp.result.is_none());
    }
}
