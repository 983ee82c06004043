//! Game session record.
//!
//! One session per chat, at most one live at a time. The session is the
//! durable unit of state: it is created when a game starts, mutated on each
//! accepted guess, and deleted the moment the game reaches a terminal
//! outcome. A session in a terminal state is never persisted.

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;

use crate::chat::ChatId;

/// Number of wrong guesses a player may make before losing.
pub const MAX_ATTEMPTS: u32 = 7;

/// The durable record of one chat's in-progress game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Primary key: the conversation this game belongs to.
    pub chat_id: ChatId,
    /// Lowercase word in the display language; immutable for the session's lifetime.
    pub secret_word: String,
    /// Single lowercase letters already attempted. Duplicates are impossible
    /// by construction; insertion order is irrelevant.
    pub guessed_letters: BTreeSet<char>,
    /// Wrong guesses left. Starts at [`MAX_ATTEMPTS`], decremented only on a
    /// wrong guess, and reaches 0 exactly when the session is deleted as a loss.
    pub attempts_remaining: u32,
}

impl GameSession {
    /// Create a fresh session: empty guessed set, full attempt budget.
    pub fn new(chat_id: ChatId, secret_word: String) -> Self {
        Self {
            chat_id,
            secret_word,
            guessed_letters: BTreeSet::new(),
            attempts_remaining: MAX_ATTEMPTS,
        }
    }

    /// Guessed letters as concatenated text, the persisted column format.
    pub fn guessed_as_text(&self) -> String {
        self.guessed_letters.iter().collect()
    }

    /// Parse the persisted concatenated-letters column back into a set.
    pub fn guessed_from_text(text: &str) -> BTreeSet<char> {
        text.chars().collect()
    }
}
