//! Summary metrics over task lists.
//!
//! Produces the dashboard's headline numbers: status totals plus task
//! counts per project and per employee. Everything here works on a
//! slice the store already returned; no queries are issued.

use crate::libs::task::{Task, TaskStatus};
use std::collections::HashMap;

/// Headline status counts for a set of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl StatusSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut summary = StatusSummary {
            total: tasks.len(),
            ..Default::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Pending => summary.pending += 1,
            }
        }
        summary
    }
}

/// Task counts per project, largest first (ties by name).
pub fn project_counts(tasks: &[Task]) -> Vec<(String, usize)> {
    tally(tasks.iter().map(|t| t.project.as_str()))
}

/// Task counts per employee, largest first (ties by name).
pub fn employee_counts(tasks: &[Task]) -> Vec<(String, usize)> {
    tally(tasks.iter().map(|t| t.employee.as_str()))
}

fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
