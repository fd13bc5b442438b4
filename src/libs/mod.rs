//! Core library modules for the taskdash application.
//!
//! Serves as the main entry point for all taskdash library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging,
//!   error taxonomy
//! - **Task Domain**: Task, status, priority and filter types
//! - **Presentation Helpers**: Console tables, summary metrics, export
//! - **Access Control**: Session marker for the login gate

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod session;
pub mod summary;
pub mod task;
pub mod view;
