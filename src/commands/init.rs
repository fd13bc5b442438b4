//! Database and configuration initialization command.
//!
//! Runs once at setup: records the reset policy in the configuration,
//! then initializes the database accordingly. A reset also ends any
//! recorded login session.

use crate::db::db::Db;
use crate::libs::{config::Config, messages::Message, session::Session};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Destroy the existing database and reload the seed data
    ///
    /// Without this flag an interactive prompt asks for the reset
    /// policy, defaulting to the currently configured value.
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset {
        Config { reset: true }
    } else {
        Config::init()?
    };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    if config.reset {
        Session::clear()?;
        msg_warning!(Message::DbReset);
    }

    Db::init(config.reset)?;
    msg_success!(Message::DbInitialized);
    Ok(())
}
