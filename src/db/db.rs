//! Database connection handling and startup initialization.
//!
//! `Db::new` opens the database file in the application data directory.
//! `Db::init` applies the startup policy: optionally wiping the
//! existing file, ensuring both tables exist, and loading the example
//! fixture exactly once. Seeding is keyed on whether a table existed
//! before the call, never on its row count, so a table the user has
//! emptied on purpose is not refilled.

use crate::db::tasks::Tasks;
use crate::db::users::Users;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use crate::msg_debug;
use rusqlite::Connection;
use std::fs;

pub const DB_FILE_NAME: &str = "taskdash.db";

const SELECT_TABLE: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }

    /// Initializes the persistent store according to the reset policy.
    ///
    /// With `reset` set, any existing database file is removed before
    /// the tables are recreated. Seed data (the 6 example tasks and the
    /// single credential) is inserted only when the corresponding table
    /// was absent before this call; running `init(false)` repeatedly
    /// never duplicates seed rows.
    pub fn init(reset: bool) -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        if reset && db_file_path.exists() {
            fs::remove_file(&db_file_path)?;
            msg_debug!("Removed existing database file");
        }

        let db = Db::new()?;
        let had_tasks = db.table_exists("tasks")?;
        let had_users = db.table_exists("users")?;

        let mut tasks = Tasks::new()?;
        if !had_tasks {
            let count = tasks.seed()?;
            msg_debug!(format!("Seeded {} example tasks", count));
        }

        let mut users = Users::new()?;
        if !had_users {
            users.seed()?;
        }

        Ok(db)
    }

    fn table_exists(&self, name: &str) -> Result<bool, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TABLE)?;
        let exists = stmt.exists([name])?;
        Ok(exists)
    }
}
