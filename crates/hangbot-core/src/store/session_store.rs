//! Session store trait.
//!
//! Durable mapping from chat identifier to at most one game session.
//! Implementations live in hangbot-infra.

use hangbot_types::chat::ChatId;
use hangbot_types::error::RepositoryError;
use hangbot_types::game::GameSession;

/// Trait for durable per-chat session persistence.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// The backing storage must survive process restart; an in-memory map is
/// only acceptable as a test fake.
pub trait SessionStore: Send + Sync {
    /// Get the session for a chat. Returns None if no game is in progress.
    fn get(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<Option<GameSession>, RepositoryError>> + Send;

    /// Insert-or-replace the session for its chat. Unconditional and idempotent.
    fn put(
        &self,
        session: &GameSession,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete the session for a chat. No-op if absent.
    fn delete(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
