//! Task listing command: filtering, search and the overdue view.

use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{TaskFilter, TaskStatus, DATE_FORMAT};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Allow-set filters shared by the list and export commands. Repeating
/// a flag widens the allowed values for that field.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Restrict to these statuses
    #[arg(long = "status")]
    statuses: Vec<TaskStatus>,
    /// Restrict to these employees
    #[arg(long = "employee")]
    employees: Vec<String>,
    /// Restrict to these projects
    #[arg(long = "project")]
    projects: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter {
            statuses: self.statuses.clone(),
            employees: self.employees.clone(),
            projects: self.projects.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,
    /// Case-insensitive substring search over employee and project
    #[arg(long, conflicts_with_all = ["statuses", "employees", "projects", "overdue"])]
    search: Option<String>,
    /// Show only overdue tasks (due before today, not completed)
    #[arg(long, conflicts_with_all = ["statuses", "employees", "projects"])]
    overdue: bool,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    require_session()?;
    let mut tasks = Tasks::new()?;
    let today = Local::now().date_naive();

    let rows = if list_args.overdue {
        msg_print!(Message::OverdueHeader(today.format(DATE_FORMAT).to_string()), true);
        tasks.find_overdue(today)?
    } else if let Some(text) = &list_args.search {
        msg_print!(Message::TasksHeader, true);
        tasks.search(text)?
    } else {
        msg_print!(Message::TasksHeader, true);
        tasks.fetch(list_args.filter.to_filter())?
    };

    if rows.is_empty() {
        msg_info!(if list_args.overdue { Message::NoOverdueTasks } else { Message::NoTasksFound });
        return Ok(());
    }

    View::tasks(&rows, today);
    Ok(())
}
