//! Persistence layer: SQLite store for weather query records.
//!
//! A single table, `weather_queries`, created on startup if missing. The
//! concrete implementation uses `sqlx::SqlitePool` for async access.

pub mod models;
pub mod sqlite;

pub use sqlite::SqlitePersistence;
