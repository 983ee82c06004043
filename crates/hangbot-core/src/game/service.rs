//! Game service orchestrating the engine against its collaborators.
//!
//! GameService coordinates between the [`SessionStore`] and the
//! [`WordProvider`]: it loads the chat's session, runs the pure engine,
//! and persists or deletes the session according to the step's fate.
//!
//! Exactly one game-mutating operation executes at a time per chat: every
//! operation takes that chat's async mutex before touching the store, so
//! concurrent events for the same chat cannot race on read-modify-write.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};

use hangbot_types::chat::ChatId;
use hangbot_types::error::{RepositoryError, WordError};
use hangbot_types::game::GameSession;

use crate::game::engine::{self, GuessOutcome, SessionFate};
use crate::store::SessionStore;
use crate::word::WordProvider;

/// Result of a start-game request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartReply {
    /// A fresh session was created; the mask is fully hidden.
    Started { mask: String },
    /// The word source or translation failed; no session was written.
    WordUnavailable,
}

/// Result of a stop-game request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReply {
    /// The in-progress game was deleted. Reveals nothing else.
    Abandoned,
    /// There was no game to stop; nothing was mutated.
    NoActiveGame,
}

/// Result of a guess request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessReply {
    /// No game is in progress for this chat.
    NoActiveGame,
    /// The engine processed the guess.
    Game(GuessOutcome),
}

/// Orchestrates the game lifecycle for all chats.
///
/// Generic over [`SessionStore`] and [`WordProvider`] so tests can inject
/// in-memory fakes (hangbot-core never depends on hangbot-infra).
pub struct GameService<S: SessionStore, W: WordProvider> {
    store: S,
    words: W,
    /// Per-chat mutual-exclusion tokens: chat_id -> lock.
    chat_locks: DashMap<ChatId, Arc<Mutex<()>>>,
}

impl<S: SessionStore, W: WordProvider> GameService<S, W> {
    /// Create a new game service with the given collaborators.
    pub fn new(store: S, words: W) -> Self {
        Self {
            store,
            words,
            chat_locks: DashMap::new(),
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Acquire this chat's lock. The dashmap entry guard is dropped before
    /// awaiting so other chats are never blocked behind the map shard.
    async fn lock_chat(&self, chat_id: ChatId) -> OwnedMutexGuard<()> {
        let lock = {
            let entry = self.chat_locks.entry(chat_id).or_default();
            entry.value().clone()
        };
        lock.lock_owned().await
    }

    /// Start a new game for a chat, silently discarding any prior session.
    ///
    /// On word-source failure the chat stays without a session and the
    /// caller gets [`StartReply::WordUnavailable`].
    pub async fn start_game(&self, chat_id: ChatId) -> Result<StartReply, RepositoryError> {
        let _guard = self.lock_chat(chat_id).await;

        let word = match self.words.fetch().await {
            Ok(word) => word,
            Err(WordError::SourceUnavailable(reason)) => {
                warn!(%chat_id, %reason, "could not fetch a word, game not started");
                return Ok(StartReply::WordUnavailable);
            }
        };

        let session = GameSession::new(chat_id, word);
        let mask = engine::mask(&session.secret_word, &session.guessed_letters);
        self.store.put(&session).await?;
        info!(%chat_id, word_len = session.secret_word.chars().count(), "game started");

        Ok(StartReply::Started { mask })
    }

    /// Stop the chat's game, if any. Valid only from an in-progress game.
    pub async fn stop_game(&self, chat_id: ChatId) -> Result<StopReply, RepositoryError> {
        let _guard = self.lock_chat(chat_id).await;

        match self.store.get(chat_id).await? {
            Some(_) => {
                self.store.delete(chat_id).await?;
                info!(%chat_id, "game abandoned");
                Ok(StopReply::Abandoned)
            }
            None => Ok(StopReply::NoActiveGame),
        }
    }

    /// Apply a guess to the chat's game, if any.
    pub async fn guess(&self, chat_id: ChatId, input: &str) -> Result<GuessReply, RepositoryError> {
        let _guard = self.lock_chat(chat_id).await;

        let Some(session) = self.store.get(chat_id).await? else {
            return Ok(GuessReply::NoActiveGame);
        };

        let step = engine::apply_guess(&session, input);
        match &step.fate {
            SessionFate::Keep => {}
            SessionFate::Persist(updated) => self.store.put(updated).await?,
            SessionFate::Delete => {
                self.store.delete(chat_id).await?;
                info!(%chat_id, "game finished");
            }
        }

        Ok(GuessReply::Game(step.outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangbot_types::game::MAX_ATTEMPTS;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    /// In-memory fake of the session store.
    #[derive(Default)]
    struct MemoryStore {
        sessions: StdMutex<HashMap<ChatId, GameSession>>,
    }

    impl SessionStore for MemoryStore {
        async fn get(&self, chat_id: ChatId) -> Result<Option<GameSession>, RepositoryError> {
            Ok(self.sessions.lock().unwrap().get(&chat_id).cloned())
        }

        async fn put(&self, session: &GameSession) -> Result<(), RepositoryError> {
            self.sessions
                .lock()
                .unwrap()
                .insert(session.chat_id, session.clone());
            Ok(())
        }

        async fn delete(&self, chat_id: ChatId) -> Result<(), RepositoryError> {
            self.sessions.lock().unwrap().remove(&chat_id);
            Ok(())
        }
    }

    /// Word provider fake that always returns the same word.
    struct FixedWords(&'static str);

    impl WordProvider for FixedWords {
        async fn fetch(&self) -> Result<String, WordError> {
            Ok(self.0.to_string())
        }
    }

    /// Word provider fake that always fails.
    struct NoWords;

    impl WordProvider for NoWords {
        async fn fetch(&self) -> Result<String, WordError> {
            Err(WordError::SourceUnavailable("test outage".to_string()))
        }
    }

    fn service(word: &'static str) -> GameService<MemoryStore, FixedWords> {
        GameService::new(MemoryStore::default(), FixedWords(word))
    }

    #[tokio::test]
    async fn test_start_game_creates_session_with_hidden_mask() {
        let svc = service("кот");
        let reply = svc.start_game(ChatId(1)).await.unwrap();
        assert_eq!(
            reply,
            StartReply::Started {
                mask: "_ _ _".to_string()
            }
        );

        let session = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        assert_eq!(session.attempts_remaining, MAX_ATTEMPTS);
        assert!(session.guessed_letters.is_empty());
    }

    #[tokio::test]
    async fn test_start_game_overwrites_prior_session() {
        let svc = service("кот");
        svc.start_game(ChatId(1)).await.unwrap();
        svc.guess(ChatId(1), "я").await.unwrap();

        // Restart resets attempts and guessed letters regardless of prior state.
        svc.start_game(ChatId(1)).await.unwrap();
        let session = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        assert_eq!(session.attempts_remaining, MAX_ATTEMPTS);
        assert!(session.guessed_letters.is_empty());
    }

    #[tokio::test]
    async fn test_start_game_word_unavailable_leaves_no_session() {
        let svc = GameService::new(MemoryStore::default(), NoWords);
        let reply = svc.start_game(ChatId(1)).await.unwrap();
        assert_eq!(reply, StartReply::WordUnavailable);
        assert!(svc.store().get(ChatId(1)).await.unwrap().is_none());

        // And a subsequent guess sees no game.
        let reply = svc.guess(ChatId(1), "а").await.unwrap();
        assert_eq!(reply, GuessReply::NoActiveGame);
    }

    #[tokio::test]
    async fn test_stop_game_without_game() {
        let svc = service("кот");
        let reply = svc.stop_game(ChatId(1)).await.unwrap();
        assert_eq!(reply, StopReply::NoActiveGame);
        assert!(svc.store().get(ChatId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stop_game_deletes_session() {
        let svc = service("кот");
        svc.start_game(ChatId(1)).await.unwrap();

        let reply = svc.stop_game(ChatId(1)).await.unwrap();
        assert_eq!(reply, StopReply::Abandoned);
        assert!(svc.store().get(ChatId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_guess_without_game() {
        let svc = service("кот");
        let reply = svc.guess(ChatId(1), "к").await.unwrap();
        assert_eq!(reply, GuessReply::NoActiveGame);
    }

    #[tokio::test]
    async fn test_repeat_guess_leaves_record_unchanged() {
        let svc = service("кот");
        svc.start_game(ChatId(1)).await.unwrap();
        svc.guess(ChatId(1), "к").await.unwrap();

        let before = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        let reply = svc.guess(ChatId(1), "к").await.unwrap();
        assert_eq!(reply, GuessReply::Game(GuessOutcome::AlreadyGuessed('к')));

        let after = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_win_deletes_session_and_reports_word() {
        let svc = service("кот");
        svc.start_game(ChatId(1)).await.unwrap();

        svc.guess(ChatId(1), "к").await.unwrap();
        svc.guess(ChatId(1), "о").await.unwrap();
        let reply = svc.guess(ChatId(1), "т").await.unwrap();
        assert_eq!(
            reply,
            GuessReply::Game(GuessOutcome::Won {
                word: "кот".to_string()
            })
        );

        assert!(svc.store().get(ChatId(1)).await.unwrap().is_none());
        let reply = svc.guess(ChatId(1), "а").await.unwrap();
        assert_eq!(reply, GuessReply::NoActiveGame);
    }

    #[tokio::test]
    async fn test_loss_deletes_session_and_reveals_word() {
        let svc = service("дом");
        svc.start_game(ChatId(1)).await.unwrap();

        for letter in ["я", "ю", "э", "ы", "щ", "ш"] {
            svc.guess(ChatId(1), letter).await.unwrap();
        }
        let reply = svc.guess(ChatId(1), "ч").await.unwrap();
        assert_eq!(
            reply,
            GuessReply::Game(GuessOutcome::Lost {
                word: "дом".to_string(),
                stage: 7
            })
        );

        assert!(svc.store().get(ChatId(1)).await.unwrap().is_none());
        let reply = svc.guess(ChatId(1), "д").await.unwrap();
        assert_eq!(reply, GuessReply::NoActiveGame);
    }

    #[tokio::test]
    async fn test_chats_are_isolated() {
        let svc = service("кот");
        svc.start_game(ChatId(1)).await.unwrap();
        svc.start_game(ChatId(2)).await.unwrap();

        svc.guess(ChatId(1), "я").await.unwrap();

        let one = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        let two = svc.store().get(ChatId(2)).await.unwrap().unwrap();
        assert_eq!(one.attempts_remaining, MAX_ATTEMPTS - 1);
        assert_eq!(two.attempts_remaining, MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_concurrent_guesses_on_one_chat_serialize() {
        let svc = Arc::new(service("кот"));
        svc.start_game(ChatId(1)).await.unwrap();

        // Fire the same wrong guess from many tasks. Exactly one may count:
        // the rest must see AlreadyGuessed, never a double decrement.
        let mut handles = Vec::new();
        for _ in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(
                async move { svc.guess(ChatId(1), "я").await },
            ));
        }

        let mut wrong = 0;
        let mut repeated = 0;
        for handle in handles {
            match handle.await.unwrap().unwrap() {
                GuessReply::Game(GuessOutcome::Wrong { .. }) => wrong += 1,
                GuessReply::Game(GuessOutcome::AlreadyGuessed(_)) => repeated += 1,
                other => panic!("unexpected reply: {other:?}"),
            }
        }
        assert_eq!(wrong, 1);
        assert_eq!(repeated, 7);

        let session = svc.store().get(ChatId(1)).await.unwrap().unwrap();
        assert_eq!(session.attempts_remaining, MAX_ATTEMPTS - 1);
    }
}
