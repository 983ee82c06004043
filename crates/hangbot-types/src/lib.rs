//! Shared domain types for Hangbot.
//!
//! This crate contains the core domain types used across the Hangbot
//! workspace: the chat identifier, the game session record, the bot
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod game;
