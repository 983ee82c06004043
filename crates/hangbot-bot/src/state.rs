//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the bot loop.
//! The game service is generic over store/provider traits, but AppState
//! pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use hangbot_core::game::GameService;
use hangbot_infra::config::{load_config, resolve_data_dir};
use hangbot_infra::sqlite::pool::DatabasePool;
use hangbot_infra::sqlite::session::SqliteSessionStore;
use hangbot_infra::word::http_provider::HttpWordProvider;
use hangbot_types::config::BotConfig;

use crate::telegram::TelegramClient;

/// Environment variable carrying the Telegram bot token.
const TOKEN_ENV: &str = "HANGBOT_TELEGRAM_TOKEN";

/// Concrete type alias for the game service pinned to infra implementations.
pub type ConcreteGameService = GameService<SqliteSessionStore, HttpWordProvider>;

/// Shared application state for the polling loop.
pub struct AppState {
    pub game_service: Arc<ConcreteGameService>,
    pub telegram: TelegramClient,
    pub config: BotConfig,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, connect to
    /// the database, and wire the game service and Telegram client.
    pub async fn init(data_dir_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir_override.unwrap_or_else(resolve_data_dir);
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

        let config = load_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("hangbot.db").display()
        );
        let db_pool = DatabasePool::new(&db_url)
            .await
            .context("failed to open database")?;

        let store = SqliteSessionStore::new(db_pool);
        let words = HttpWordProvider::new(&config);
        let game_service = Arc::new(GameService::new(store, words));

        let token = std::env::var(TOKEN_ENV)
            .with_context(|| format!("{TOKEN_ENV} is not set"))?;
        let telegram = TelegramClient::new(SecretString::from(token), config.poll_timeout_secs);

        Ok(Self {
            game_service,
            telegram,
            config,
        })
    }
}
