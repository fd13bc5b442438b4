use super::summary::StatusSummary;
use super::task::Task;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a task list. Overdue rows are flagged in the last column.
    pub fn tasks(tasks: &[Task], reference: NaiveDate) {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "EMPLOYEE", "STATUS", "START", "DUE", "COMPLETED", "PRIORITY", ""]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.project,
                task.employee,
                task.status,
                task.start_date,
                task.due_date,
                task.completed_date.as_deref().unwrap_or("-"),
                task.priority,
                if task.is_overdue(reference) { "OVERDUE" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn summary(summary: &StatusSummary) {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "IN PROGRESS", "PENDING"]);
        table.add_row(row![summary.total, summary.completed, summary.in_progress, summary.pending]);
        table.printstd();
    }

    /// Renders a label/count tally, e.g. tasks per project or employee.
    pub fn counts(title: &str, counts: &[(String, usize)]) {
        let mut table = Table::new();

        table.add_row(row![title.to_uppercase(), "TASKS"]);
        for (label, count) in counts {
            table.add_row(row![label, count]);
        }
        table.printstd();
    }
}
