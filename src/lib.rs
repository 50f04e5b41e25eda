//! # projectpulse
//!
//! REST API backend for the ProjectPulse project tracker.
//!
//! This crate persists and serves `Project` records over a JSON REST API
//! backed by a file-backed SQLite store, and hosts the pre-built
//! single-page frontend from the same origin.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Frontend bundle (frontend.rs, tower-http ServeDir)
//!     │
//!     ├── ProjectService (service/)
//!     │
//!     └── SqliteStore (persistence/, sqlx::SqlitePool)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod frontend;
pub mod persistence;
pub mod service;
