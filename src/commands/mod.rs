//! Command-line interface of the taskdash application.
//!
//! Each subcommand lives in its own module and is a thin caller into
//! the database stores; no filtering, search or overdue logic is
//! re-implemented here. Every data command is gated on a recorded
//! login session.

pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod status;
pub mod sum;
pub mod task;

use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize configuration and database")]
    Init(init::InitArgs),
    #[command(about = "Log in to the dashboard")]
    Login,
    #[command(about = "Create a task")]
    Task(task::TaskArgs),
    #[command(about = "List tasks with optional filters")]
    List(list::ListArgs),
    #[command(about = "Update the status of a task")]
    Status(status::StatusArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show summary metrics")]
    Sum,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Sum => sum::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Returns the logged-in username or fails with a login hint.
pub(crate) fn require_session() -> Result<String> {
    Session::current().ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
}
