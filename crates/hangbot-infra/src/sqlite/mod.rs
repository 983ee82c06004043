//! SQLite persistence layer.
//!
//! - `pool`: split reader/writer connection pools in WAL mode
//! - `session`: `SessionStore` implementation over the `games` table

pub mod pool;
pub mod session;

pub use pool::DatabasePool;
pub use session::SqliteSessionStore;
