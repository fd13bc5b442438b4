use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task id
    #[arg(required = true)]
    id: i64,
    /// New status ("Pending", "In Progress", "Completed")
    #[arg(required = true)]
    status: TaskStatus,
}

pub fn cmd(status_args: StatusArgs) -> Result<()> {
    require_session()?;
    let affected = Tasks::new()?.update_status(status_args.id, status_args.status)?;
    if affected == 0 {
        msg_warning!(Message::TaskNotFoundWithId(status_args.id));
    } else {
        msg_success!(Message::TaskStatusUpdated(status_args.id));
    }
    Ok(())
}
