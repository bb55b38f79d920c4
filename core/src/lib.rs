//! chainfeed-core — connection state and activity feed logic for the
//! social + wallet activity tracker.
//!
//! RULES:
//!   - Only store.rs talks to the database.
//!   - Fixture records are immutable; queries never mutate them.
//!   - UI-facing state lives in `App` — no global mutable state.

pub mod activity;
pub mod app;
pub mod connection;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod store;
pub mod types;
pub mod wallet;
