//! Durable key-value slots.
//!
//! The week is persisted as one serialized value under one key. Writers
//! simply overwrite: the last write wins and nothing coordinates two
//! processes sharing the same database.

use crate::db::db::Db;
use crate::db::error::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

const SCHEMA_SLOTS: &str = "CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_SLOT: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT: &str = "INSERT INTO slots (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// A store of named text slots.
pub trait SlotStorage {
    /// Reads the value under `key`, `None` when the slot was never written.
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value under `key`.
    fn write_slot(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed slots.
pub struct Slots {
    conn: Connection,
}

impl Slots {
    /// Wraps an open database, creating the slots table if needed.
    pub fn new(db: Db) -> StorageResult<Self> {
        db.conn.execute(SCHEMA_SLOTS, [])?;
        Ok(Slots { conn: db.conn })
    }
}

impl SlotStorage for Slots {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_SLOT, [key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn write_slot(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(UPSERT_SLOT, params![key, value])?;
        Ok(())
    }
}

/// In-process slots that vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    values: HashMap<String, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemorySlots {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
