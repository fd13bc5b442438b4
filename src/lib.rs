//! # Taskdash - Smart Task Dashboard
//!
//! A command-line dashboard for tracking project tasks backed by a
//! local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create tasks, update their status, delete them
//! - **Querying**: Filter by status/employee/project, free-text search,
//!   overdue detection
//! - **Summary Metrics**: Status totals plus per-project and
//!   per-employee counts
//! - **Data Export**: Export task lists to CSV and JSON
//! - **Access Gate**: A single-credential login guarding all data
//!   commands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
