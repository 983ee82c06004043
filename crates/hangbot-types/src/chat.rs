//! Chat identifier type.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque identifier of a conversation, used as the session primary key.
///
/// Wraps the signed 64-bit chat id Telegram assigns to every conversation.
/// The game core treats it as an opaque key and never inspects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        assert_eq!(ChatId(42).to_string(), "42");
        assert_eq!(ChatId(-1001234).to_string(), "-1001234");
    }

    #[test]
    fn test_serde_transparent() {
        let id: ChatId = serde_json::from_str("77").unwrap();
        assert_eq!(id, ChatId(77));
    }
}
