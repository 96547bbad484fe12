//! Key-value persistence collaborator.
//!
//! # Responsibility
//! - Define the opaque string-keyed storage contract the roster store
//!   persists through.
//! - Provide an in-memory implementation for tests and embedders without
//!   durable storage.
//!
//! # Invariants
//! - `set` followed by `get` on the same key returns the written value.
//! - Implementations never interpret stored values; serialization stays in
//!   the store layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteKeyValueStore;

pub type KvResult<T> = Result<T, KvError>;

/// Transport-level error for key-value storage operations.
#[derive(Debug)]
pub enum KvError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "kv schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable string storage keyed by name.
///
/// The roster store treats this as an opaque collaborator: one key holds
/// the whole serialized roster, read once at startup and overwritten on
/// every mutation.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;

    /// Removes `key` if present. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> KvResult<()>;
}

/// HashMap-backed store for tests and non-durable embedders.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> KvResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn memory_store_roundtrips_values() {
        let mut store = MemoryKeyValueStore::new();
        assert_eq!(store.get("teamList").unwrap(), None);

        store.set("teamList", "[]").unwrap();
        assert_eq!(store.get("teamList").unwrap().as_deref(), Some("[]"));

        store.set("teamList", "[1]").unwrap();
        assert_eq!(store.get("teamList").unwrap().as_deref(), Some("[1]"));

        store.remove("teamList").unwrap();
        store.remove("teamList").unwrap();
        assert_eq!(store.get("teamList").unwrap(), None);
    }
}
