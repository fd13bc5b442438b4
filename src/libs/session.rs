//! Login session marker.
//!
//! The dashboard gates every data command on a prior successful login.
//! A successful `login` writes a marker file holding the username into
//! the application data directory; data commands check for it before
//! touching the store. There is no logout command: a session stays
//! valid until the database is re-initialized with the reset policy,
//! which removes the marker.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs;

pub const SESSION_FILE_NAME: &str = "session";

pub struct Session;

impl Session {
    /// Records a successful login.
    pub fn start(username: &str) -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        fs::write(path, username)?;
        Ok(())
    }

    /// Returns the logged-in username, if a session exists.
    pub fn current() -> Option<String> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME).ok()?;
        let username = fs::read_to_string(path).ok()?;
        let username = username.trim().to_string();
        if username.is_empty() {
            None
        } else {
            Some(username)
        }
    }

    /// Removes the marker. Called when the database is reset.
    pub fn clear() -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
