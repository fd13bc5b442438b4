use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    require_session()?;
    let affected = Tasks::new()?.delete(delete_args.id)?;
    if affected == 0 {
        msg_warning!(Message::TaskNotFoundWithId(delete_args.id));
    } else {
        msg_success!(Message::TaskDeleted(delete_args.id));
    }
    Ok(())
}
