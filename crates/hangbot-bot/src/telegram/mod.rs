//! Minimal Telegram Bot API binding: long polling and message sending.

pub mod client;
pub mod types;

pub use client::TelegramClient;
pub use types::{Chat, Message, Update};
