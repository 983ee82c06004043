//! SQLite session store implementation.
//!
//! Implements `SessionStore` from `hangbot-core` using sqlx with split
//! read/write pools. Guessed letters are stored as concatenated text in a
//! single column and rebuilt into a set on read.

use chrono::{DateTime, Utc};
use sqlx::Row;

use hangbot_core::store::SessionStore;
use hangbot_types::chat::ChatId;
use hangbot_types::error::RepositoryError;
use hangbot_types::game::GameSession;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SessionStore`.
pub struct SqliteSessionStore {
    pool: DatabasePool,
}

impl SqliteSessionStore {
    /// Create a new session store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct GameRow {
    chat_id: i64,
    secret_word: String,
    guessed_letters: String,
    attempts_remaining: i64,
}

impl GameRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            chat_id: row.try_get("chat_id")?,
            secret_word: row.try_get("secret_word")?,
            guessed_letters: row.try_get("guessed_letters")?,
            attempts_remaining: row.try_get("attempts_remaining")?,
        })
    }

    fn into_session(self) -> Result<GameSession, RepositoryError> {
        let attempts_remaining = u32::try_from(self.attempts_remaining).map_err(|_| {
            RepositoryError::Query(format!(
                "invalid attempts_remaining: {}",
                self.attempts_remaining
            ))
        })?;

        Ok(GameSession {
            chat_id: ChatId(self.chat_id),
            secret_word: self.secret_word,
            guessed_letters: GameSession::guessed_from_text(&self.guessed_letters),
            attempts_remaining,
        })
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// SessionStore implementation
// ---------------------------------------------------------------------------

impl SessionStore for SqliteSessionStore {
    async fn get(&self, chat_id: ChatId) -> Result<Option<GameSession>, RepositoryError> {
        let row = sqlx::query(
            "SELECT chat_id, secret_word, guessed_letters, attempts_remaining FROM games WHERE chat_id = ?",
        )
        .bind(chat_id.0)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let game_row =
                    GameRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(game_row.into_session()?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, session: &GameSession) -> Result<(), RepositoryError> {
        let now = format_datetime(&Utc::now());

        sqlx::query(
            r#"INSERT INTO games (chat_id, secret_word, guessed_letters, attempts_remaining, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT (chat_id) DO UPDATE SET
                   secret_word = excluded.secret_word,
                   guessed_letters = excluded.guessed_letters,
                   attempts_remaining = excluded.attempts_remaining,
                   updated_at = excluded.updated_at"#,
        )
        .bind(session.chat_id.0)
        .bind(&session.secret_word)
        .bind(session.guessed_as_text())
        .bind(i64::from(session.attempts_remaining))
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, chat_id: ChatId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM games WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
