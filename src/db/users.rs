//! Credential table store.
//!
//! Holds the single login credential and answers the authentication
//! check. Passwords are stored and compared as plaintext, matching the
//! data this tool inherits; the [`Authenticator`] trait is the seam
//! where a hashed comparison can be substituted without touching any
//! caller.

use super::db::Db;
use crate::libs::error::StoreError;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT NOT NULL PRIMARY KEY,
    password TEXT NOT NULL
);";
const SELECT_CREDENTIAL: &str = "SELECT username FROM users WHERE username = ?1 AND password = ?2";
const INSERT_SEED_USER: &str = "INSERT OR IGNORE INTO users (username, password) VALUES (?1, ?2)";

pub const SEED_USERNAME: &str = "admin";
const SEED_PASSWORD: &str = "admin123";

/// The authentication check behind which credential storage hides.
pub trait Authenticator {
    /// Exact, case-sensitive credential check. `Ok(false)` means "no
    /// such credential"; errors are reserved for storage failures.
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool, StoreError>;
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self, StoreError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Users { conn: db.conn })
    }

    /// Inserts the fixed credential. Called by [`Db::init`] when the
    /// table is created for the first time.
    pub fn seed(&mut self) -> Result<(), StoreError> {
        self.conn.execute(INSERT_SEED_USER, params![SEED_USERNAME, SEED_PASSWORD])?;
        Ok(())
    }
}

impl Authenticator for Users {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool, StoreError> {
        let found = self
            .conn
            .query_row(SELECT_CREDENTIAL, params![username, password], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(found.is_some())
    }
}
