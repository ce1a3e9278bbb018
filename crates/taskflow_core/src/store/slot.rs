//! Key-value slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide typed load/save/clear over named slots of serialized JSON.
//! - Isolate SQLite query details from collection/service orchestration.
//!
//! # Invariants
//! - `load` is total: deserialization failure degrades to the default and is
//!   logged, never propagated.
//! - `save` replaces the whole slot value atomically (single-row upsert).

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by slot write paths; read paths never surface errors.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value slot holding one serialized value per key.
pub trait SlotStore {
    /// Returns the stored value for `key`, or `default` when the slot is
    /// absent or its contents fail to deserialize.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    /// Serializes `value` and writes it synchronously to the slot, replacing
    /// any previous contents.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()>;

    /// Removes the slot entirely; a subsequent `load` yields the default.
    fn clear(&self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed slot store.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_raw(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.read_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                warn!("event=slot_load module=store status=fallback key={key} reason=db_read_failed error={err}");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=slot_load module=store status=fallback key={key} reason=deserialize_failed error={err}");
                default
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, raw],
        )?;

        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
