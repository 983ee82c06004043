//! Word provider trait.
//!
//! Obtains one ready-to-play word in the display language. The HTTP
//! implementation (remote word list + translation) lives in hangbot-infra.

use hangbot_types::error::WordError;

/// Trait for fetching the secret word for a new game.
///
/// Every call is a fresh remote round-trip; implementations do not cache.
/// Any failure along the way surfaces as [`WordError::SourceUnavailable`],
/// which callers must treat as "no game could be started", not a crash.
pub trait WordProvider: Send + Sync {
    /// Fetch one lowercase word in the display language.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String, WordError>> + Send;
}
