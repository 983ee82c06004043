//! Infrastructure implementations for Hangbot.
//!
//! Concrete implementations of the hangbot-core traits: the SQLite-backed
//! session store and the HTTP word provider (remote word list plus
//! translation), along with the config loader and data-directory resolution.

pub mod config;
pub mod sqlite;
pub mod word;
