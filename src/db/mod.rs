//! Database layer for the taskdash application.
//!
//! A small persistence layer built on SQLite. Each table is owned by
//! exactly one store module that defines its schema and all operations
//! on it; the two stores share nothing beyond the database file itself.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::db::{db::Db, tasks::Tasks};
//! use taskdash::libs::task::{Priority, Task, TaskStatus};
//!
//! # fn run() -> Result<(), taskdash::libs::error::StoreError> {
//! Db::init(false)?;
//! let mut tasks = Tasks::new()?;
//! let task = Task::new("Alpha", "Anurag", TaskStatus::Pending, "2024-06-01", "2024-06-10", None, Priority::High);
//! let id = tasks.insert(&task)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite database and applies
/// the reset/seed policy on startup.
pub mod db;

/// Task table store.
///
/// CRUD operations for tasks plus the query surface: filtering,
/// free-text search and overdue detection.
pub mod tasks;

/// Credential table store.
///
/// Holds the single login credential and the authentication check
/// behind the [`users::Authenticator`] trait.
pub mod users;
