//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! Everything else goes through `ConnectionStore` — it never sees SQL.

use crate::{
    connection::{ConnectionState, WalletTarget},
    error::FeedResult,
};
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed logical key the connection state is stored under.
const STATE_KEY: &str = "connection_state";

pub struct StateStore {
    conn: Connection,
}

impl StateStore {
    /// Open (or create) the state database at `path`.
    pub fn open(path: &str) -> FeedResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> FeedResult<Self> {
        let conn = Connection::open(":memory:")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> FeedResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_state.sql"))?;
        Ok(())
    }

    /// Load the persisted connection state, if any was ever written.
    pub fn load_state(&self) -> FeedResult<Option<ConnectionState>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        match blob {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Rewrite the full state blob under the fixed key.
    pub fn save_state(&self, state: &ConnectionState) -> FeedResult<()> {
        let json = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            params![STATE_KEY, json],
        )?;
        Ok(())
    }
}

/// The connection store: in-memory state of record, persisted after
/// every mutation. A failed write is logged and the session continues
/// in memory only — the in-memory change is never rolled back.
pub struct ConnectionStore {
    state: ConnectionState,
    store: StateStore,
}

impl ConnectionStore {
    /// Open the backing database and perform the one-time startup load.
    pub fn open(path: &str) -> FeedResult<Self> {
        let store = StateStore::open(path)?;
        store.migrate()?;
        let state = Self::load_or_default(&store);
        Ok(Self { state, store })
    }

    /// In-memory store for tests: same behavior, no file.
    pub fn in_memory() -> FeedResult<Self> {
        let store = StateStore::in_memory()?;
        store.migrate()?;
        let state = Self::load_or_default(&store);
        Ok(Self { state, store })
    }

    fn load_or_default(store: &StateStore) -> ConnectionState {
        match store.load_state() {
            Ok(Some(state)) => state,
            Ok(None) => ConnectionState::new(),
            Err(e) => {
                log::warn!("failed to load connection state, starting disconnected: {e}");
                ConnectionState::new()
            }
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn connect_social(&mut self, handle: &str) -> FeedResult<()> {
        self.state.connect_social(handle)?;
        self.persist();
        Ok(())
    }

    pub fn disconnect_social(&mut self) {
        self.state.disconnect_social();
        self.persist();
    }

    pub fn connect_wallet(&mut self, address: &str) -> FeedResult<()> {
        self.state.connect_wallet(address)?;
        self.persist();
        Ok(())
    }

    pub fn disconnect_wallet(&mut self, target: &WalletTarget) {
        self.state.disconnect_wallet(target);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_state(&self.state) {
            log::warn!("failed to persist connection state, continuing in memory: {e}");
        }
    }
}
