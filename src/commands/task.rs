//! Task creation command.
//!
//! Fields may be passed as flags; anything missing is collected through
//! an interactive form, mirroring the add-task form of the dashboard.
//! Validation happens in the store, not here.

use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskStatus, DATE_FORMAT};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Project label
    #[arg(long)]
    project: Option<String>,
    /// Employee label
    #[arg(long)]
    employee: Option<String>,
    /// Task status ("Pending", "In Progress", "Completed")
    #[arg(long)]
    status: Option<TaskStatus>,
    /// Task priority ("Low", "Medium", "High")
    #[arg(long)]
    priority: Option<Priority>,
    /// Start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
    /// Completion date (YYYY-MM-DD)
    #[arg(long)]
    completed: Option<String>,
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    require_session()?;
    let theme = ColorfulTheme::default();

    let project = match task_args.project {
        Some(project) => project,
        None => Input::with_theme(&theme).with_prompt("Project").interact_text()?,
    };
    let employee = match task_args.employee {
        Some(employee) => employee,
        None => Input::with_theme(&theme).with_prompt("Employee").interact_text()?,
    };
    let status = match task_args.status {
        Some(status) => status,
        None => {
            let options = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];
            let selection = Select::with_theme(&theme).with_prompt("Status").items(&options).default(0).interact()?;
            options[selection]
        }
    };
    let priority = match task_args.priority {
        Some(priority) => priority,
        None => {
            let options = [Priority::Low, Priority::Medium, Priority::High];
            let selection = Select::with_theme(&theme).with_prompt("Priority").items(&options).default(1).interact()?;
            options[selection]
        }
    };
    let start = match task_args.start {
        Some(start) => start,
        None => Input::with_theme(&theme)
            .with_prompt("Start date (YYYY-MM-DD)")
            .default(Local::now().format(DATE_FORMAT).to_string())
            .interact_text()?,
    };
    let due = match task_args.due {
        Some(due) => due,
        None => Input::with_theme(&theme).with_prompt("Due date (YYYY-MM-DD)").interact_text()?,
    };
    // The completion date only makes sense for completed tasks, and
    // even then it stays optional.
    let completed = match task_args.completed {
        Some(completed) => Some(completed),
        None if status == TaskStatus::Completed => {
            let input: String = Input::with_theme(&theme)
                .with_prompt("Completed date (YYYY-MM-DD, optional)")
                .allow_empty(true)
                .interact_text()?;
            if input.is_empty() {
                None
            } else {
                Some(input)
            }
        }
        None => None,
    };

    let task = Task::new(&project, &employee, status, &start, &due, completed.as_deref(), priority);
    let id = Tasks::new()?.insert(&task)?;
    msg_success!(Message::TaskCreated(id));
    Ok(())
}
