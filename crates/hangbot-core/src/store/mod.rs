//! Persistence trait for game sessions.

pub mod session_store;

pub use session_store::SessionStore;
