//! Core task domain types shared across the database and command layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for every date column in the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a task.
///
/// The textual form matches the stored column value, including the
/// space in "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A unit of tracked work.
///
/// Dates stay as raw strings: the underlying columns are TEXT and rows
/// written outside the validated insert path may hold anything, while
/// `fetch` must still return every row. Parsed access goes through
/// [`Task::due_date_parsed`]. `completed_date` is advisory only; a
/// non-Completed task may carry `None` (stored as an empty string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub project: String,
    pub employee: String,
    pub status: TaskStatus,
    pub start_date: String,
    pub due_date: String,
    pub completed_date: Option<String>,
    pub priority: Priority,
}

impl Task {
    pub fn new(project: &str, employee: &str, status: TaskStatus, start_date: &str, due_date: &str, completed_date: Option<&str>, priority: Priority) -> Self {
        Task {
            id: None,
            project: project.to_string(),
            employee: employee.to_string(),
            status,
            start_date: start_date.to_string(),
            due_date: due_date.to_string(),
            completed_date: completed_date.map(|d| d.to_string()),
            priority,
        }
    }

    /// Returns the due date as a calendar date, or `None` when the raw
    /// value is empty or does not parse.
    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, DATE_FORMAT).ok()
    }

    /// A task is overdue when it is not completed and its due date lies
    /// strictly before the reference date. Unparseable due dates are
    /// never overdue.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due_date_parsed().map(|due| due < reference).unwrap_or(false)
    }
}

/// Allow-sets for fetching tasks.
///
/// An empty set places no restriction on its field; non-empty sets
/// require membership and combine with AND across fields. The default
/// filter matches every row.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub statuses: Vec<TaskStatus>,
    pub employees: Vec<String>,
    pub projects: Vec<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.employees.is_empty() && self.projects.is_empty()
    }
}
