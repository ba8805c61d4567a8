//! Core library surface for hikma, a fortune-style terminal companion for
//! Arabic poetry, wisdom quotes, and prophetic hadith.
//!
//! The public modules expose an intentionally small API so the `bin` target
//! and the tests can reuse the same pieces: `db` bootstraps the bundled
//! SQLite store and selects random rows, `cli` resolves flags into a query
//! mode, and `ui` renders the result.

pub mod cli;
pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` to bring up the store and draw one piece of content.
pub use db::{ensure_database, open_database, pick, pick_with_fallback};

/// The primary domain types that other layers manipulate.
pub use models::{Content, Mode};
