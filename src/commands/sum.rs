use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::summary::{self, StatusSummary};
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    require_session()?;
    let tasks = Tasks::new()?.fetch(TaskFilter::default())?;

    msg_print!(Message::SummaryHeader, true);
    View::summary(&StatusSummary::from_tasks(&tasks));
    View::counts("Project", &summary::project_counts(&tasks));
    View::counts("Employee", &summary::employee_counts(&tasks));
    Ok(())
}
