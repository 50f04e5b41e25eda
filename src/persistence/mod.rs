//! Persistence layer: SQLite-backed project storage.
//!
//! Owns the single connection pool to the file-backed store and
//! guarantees the `projects` table exists before any request is served.
//! The concrete implementation uses `sqlx::SqlitePool` for async access.

pub mod models;
pub mod sqlite;
