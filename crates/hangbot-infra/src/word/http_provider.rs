//! HTTP word provider: remote word list plus translation.
//!
//! Implements `WordProvider` from `hangbot-core`. Fetches one random English
//! word from the word-list endpoint, then renders it in the display language
//! through the unauthenticated Google web-translate endpoint (`client=gtx`).
//!
//! Word-fetch and translation failures are both reported as
//! `SourceUnavailable`: the caller cannot and should not tell them apart.

use std::time::Duration;

use hangbot_core::word::WordProvider;
use hangbot_types::config::BotConfig;
use hangbot_types::error::WordError;

/// HTTP implementation of `WordProvider`.
pub struct HttpWordProvider {
    client: reqwest::Client,
    word_api_url: String,
    translate_api_url: String,
    target_lang: String,
}

impl HttpWordProvider {
    /// Create a new provider from the bot configuration.
    pub fn new(config: &BotConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            word_api_url: config.word_api_url.clone(),
            translate_api_url: config.translate_api_url.clone(),
            target_lang: config.target_lang.clone(),
        }
    }

    /// Fetch one random lowercase English word from the word-list endpoint.
    async fn fetch_candidate(&self) -> Result<String, WordError> {
        let response = self
            .client
            .get(&self.word_api_url)
            .send()
            .await
            .map_err(|e| WordError::SourceUnavailable(format!("word request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordError::SourceUnavailable(format!(
                "word source returned HTTP {status}"
            )));
        }

        let words: Vec<String> = response
            .json()
            .await
            .map_err(|e| WordError::SourceUnavailable(format!("invalid word response: {e}")))?;

        let word = words
            .into_iter()
            .next()
            .filter(|w| !w.is_empty())
            .ok_or_else(|| WordError::SourceUnavailable("word source returned no word".to_string()))?;

        Ok(word.to_lowercase())
    }

    /// Translate a word to the target display language.
    async fn translate(&self, word: &str) -> Result<String, WordError> {
        let response = self
            .client
            .get(&self.translate_api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", word),
            ])
            .send()
            .await
            .map_err(|e| WordError::SourceUnavailable(format!("translation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordError::SourceUnavailable(format!(
                "translator returned HTTP {status}"
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            WordError::SourceUnavailable(format!("invalid translation response: {e}"))
        })?;

        extract_translation(&body).ok_or_else(|| {
            WordError::SourceUnavailable("translation response had no text".to_string())
        })
    }
}

/// Pull the translated text out of the gtx response shape:
/// `[[["<translation>", "<original>", ...], ...], ...]`.
fn extract_translation(body: &serde_json::Value) -> Option<String> {
    let text = body.get(0)?.get(0)?.get(0)?.as_str()?;
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

impl WordProvider for HttpWordProvider {
    async fn fetch(&self) -> Result<String, WordError> {
        let candidate = self.fetch_candidate().await?;
        let translated = self.translate(&candidate).await?;
        tracing::debug!(%candidate, %translated, "word fetched");
        // Translations of lowercase words can still come back capitalized.
        Ok(translated.to_lowercase())
    }
}
