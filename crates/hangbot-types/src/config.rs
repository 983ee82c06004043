//! Bot configuration.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! default so a missing or partial file still yields a usable config. The
//! Telegram token is NOT part of this file; it comes from the environment
//! and is handled as a secret by the binary.

use serde::{Deserialize, Serialize};

/// Global configuration for the bot process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Endpoint returning a JSON array with one random English word.
    #[serde(default = "default_word_api_url")]
    pub word_api_url: String,

    /// Translation endpoint (Google web translate, `client=gtx`).
    #[serde(default = "default_translate_api_url")]
    pub translate_api_url: String,

    /// Target display language for the secret word.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    /// Long-poll timeout passed to Telegram `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_word_api_url() -> String {
    "https://random-word-api.herokuapp.com/word".to_string()
}

fn default_translate_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_target_lang() -> String {
    "ru".to_string()
}

fn default_poll_timeout_secs() -> u64 {
    30
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            word_api_url: default_word_api_url(),
            translate_api_url: default_translate_api_url(),
            target_lang: default_target_lang(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.target_lang, "ru");
        assert_eq!(config.poll_timeout_secs, 30);
        assert!(config.word_api_url.starts_with("https://"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BotConfig = toml::from_str(r#"target_lang = "de""#).unwrap();
        assert_eq!(config.target_lang, "de");
        assert_eq!(config.poll_timeout_secs, 30);
        assert_eq!(config.word_api_url, default_word_api_url());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: BotConfig = toml::from_str("").unwrap();
        assert_eq!(config.poll_timeout_secs, BotConfig::default().poll_timeout_secs);
    }
}
