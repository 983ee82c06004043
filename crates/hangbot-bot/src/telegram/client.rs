//! Telegram Bot API client over reqwest.
//!
//! Supports the two methods the bot needs: `getUpdates` (long polling) and
//! `sendMessage`. The bot token is wrapped in [`secrecy::SecretString`] and
//! is exposed only while building the request URL; it never appears in
//! `Debug` output or logs.

use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use hangbot_types::chat::ChatId;

use super::types::{ApiResponse, Update};

/// Extra headroom over the long-poll timeout before reqwest gives up.
const HTTP_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Minimal Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl TelegramClient {
    /// Create a new client for the given bot token.
    ///
    /// `poll_timeout_secs` is the long-poll timeout later passed to
    /// `get_updates`; the HTTP timeout is set above it so a quiet long poll
    /// is not treated as a network error.
    pub fn new(token: SecretString, poll_timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs) + HTTP_TIMEOUT_MARGIN)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a method.
    fn url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url,
            self.token.expose_secret(),
            method
        )
    }

    /// Long-poll for updates with ids >= `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> anyhow::Result<Vec<Update>> {
        let response = self
            .client
            .get(self.url("getUpdates"))
            .query(&[("offset", offset), ("timeout", timeout_secs as i64)])
            .send()
            .await
            .context("getUpdates request failed")?;

        let envelope: ApiResponse<Vec<Update>> = response
            .json()
            .await
            .context("getUpdates returned invalid JSON")?;

        if !envelope.ok {
            anyhow::bail!(
                "getUpdates rejected: {}",
                envelope.description.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        Ok(envelope.result.unwrap_or_default())
    }

    /// Send a plain-text message to a chat.
    pub async fn send_message(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.url("sendMessage"))
            .json(&serde_json::json!({
                "chat_id": chat_id.0,
                "text": text,
            }))
            .send()
            .await
            .context("sendMessage request failed")?;

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .context("sendMessage returned invalid JSON")?;

        if !envelope.ok {
            anyhow::bail!(
                "sendMessage rejected: {}",
                envelope.description.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        Ok(())
    }
}

// TelegramClient intentionally does NOT derive Debug so the token can never
// leak through formatting.
