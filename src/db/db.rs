use crate::db::error::StorageResult;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "timesheet.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database named in the configuration, inside the data directory.
    pub fn new(config: &Config) -> StorageResult<Db> {
        let db_file_path = DataStorage::new().get_path(&config.storage().db_file_name)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> StorageResult<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn open_in_memory() -> StorageResult<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
