//! Task table store.
//!
//! Owns the `tasks` table: schema, the seed fixture, CRUD operations
//! and the query surface (filtering, search, overdue detection).
//! Mutation is deliberately narrow: after creation only the status of
//! a task is ever updated in place.
//!
//! `update_status` and `delete` return the number of affected rows so
//! a missing id surfaces as `Ok(0)` rather than being swallowed or
//! aborting the caller.

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::task::{Task, TaskFilter, TaskStatus, DATE_FORMAT};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    project TEXT NOT NULL,
    employee TEXT NOT NULL,
    status TEXT NOT NULL,
    start_date TEXT NOT NULL,
    due_date TEXT NOT NULL,
    completed_date TEXT NOT NULL DEFAULT '',
    priority TEXT NOT NULL
);";
const INSERT_TASK: &str = "INSERT INTO tasks (project, employee, status, start_date, due_date, completed_date, priority) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_SEED_TASK: &str = "INSERT INTO tasks (id, project, employee, status, start_date, due_date, completed_date, priority) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASKS: &str = "SELECT id, project, employee, status, start_date, due_date, completed_date, priority FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_SEARCH: &str = "WHERE employee LIKE ?1 OR project LIKE ?1";
const WHERE_OPEN: &str = "WHERE status != 'Completed'";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// The example dataset loaded on first initialization.
const SEED_TASKS: [(i64, &str, &str, &str, &str, &str, &str, &str); 6] = [
    (1, "Alpha", "Anurag", "Completed", "2024-06-01", "2024-06-05", "2024-06-04", "High"),
    (2, "Beta", "Ravi", "Pending", "2024-06-03", "2024-06-10", "", "Medium"),
    (3, "Alpha", "Anurag", "In Progress", "2024-06-05", "2024-06-12", "", "High"),
    (4, "Gamma", "Astha", "Pending", "2024-06-01", "2024-06-07", "", "Low"),
    (5, "Beta", "Anurag", "Completed", "2024-06-08", "2024-06-15", "2024-06-13", "Medium"),
    (6, "Gamma", "Ravi", "In Progress", "2024-06-06", "2024-06-14", "", "High"),
];

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self, StoreError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: db.conn })
    }

    /// Loads the example fixture. Called by [`Db::init`] when the
    /// table is created for the first time.
    pub fn seed(&mut self) -> Result<usize, StoreError> {
        for (id, project, employee, status, start_date, due_date, completed_date, priority) in SEED_TASKS {
            self.conn
                .execute(INSERT_SEED_TASK, params![id, project, employee, status, start_date, due_date, completed_date, priority])?;
        }
        Ok(SEED_TASKS.len())
    }

    /// Inserts a new task after validating it and returns the assigned id.
    pub fn insert(&mut self, task: &Task) -> Result<i64, StoreError> {
        Self::validate(task)?;
        self.conn.execute(
            INSERT_TASK,
            params![
                task.project,
                task.employee,
                task.status.to_string(),
                task.start_date,
                task.due_date,
                task.completed_date.as_deref().unwrap_or(""),
                task.priority.to_string()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns tasks matching the filter, in storage order. The default
    /// filter returns every row.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if !filter.statuses.is_empty() {
            clauses.push(format!("status IN ({})", vec!["?"; filter.statuses.len()].join(", ")));
            values.extend(filter.statuses.iter().map(|s| s.to_string()));
        }
        if !filter.employees.is_empty() {
            clauses.push(format!("employee IN ({})", vec!["?"; filter.employees.len()].join(", ")));
            values.extend(filter.employees.iter().cloned());
        }
        if !filter.projects.is_empty() {
            clauses.push(format!("project IN ({})", vec!["?"; filter.projects.len()].join(", ")));
            values.extend(filter.projects.iter().cloned());
        }

        let sql = if clauses.is_empty() {
            SELECT_TASKS.to_string()
        } else {
            format!("{} WHERE {}", SELECT_TASKS, clauses.join(" AND "))
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Returns the task with the given id, or `NotFound`.
    pub fn get_by_id(&mut self, id: i64) -> Result<Task, StoreError> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Sets the status of the task with the given id and returns the
    /// number of rows affected. A missing id yields `Ok(0)`.
    pub fn update_status(&mut self, id: i64, status: TaskStatus) -> Result<usize, StoreError> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status.to_string()])?;
        Ok(affected)
    }

    /// Deletes the task with the given id and returns the number of
    /// rows affected. A missing id yields `Ok(0)`.
    pub fn delete(&mut self, id: i64) -> Result<usize, StoreError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected)
    }

    /// Case-insensitive substring search over employee and project.
    /// Empty text matches every row.
    pub fn search(&mut self, text: &str) -> Result<Vec<Task>, StoreError> {
        if text.is_empty() {
            return self.fetch(TaskFilter::default());
        }
        let pattern = format!("%{}%", text);
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_SEARCH))?;
        let task_iter = stmt.query_map(params![pattern], Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Returns non-completed tasks whose due date lies strictly before
    /// the reference date. Rows with an empty or unparseable due date
    /// are skipped.
    pub fn find_overdue(&mut self, reference: NaiveDate) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_OPEN))?;
        let task_iter = stmt.query_map([], Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            let task = task?;
            if task.is_overdue(reference) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let status: String = row.get(3)?;
        let priority: String = row.get(7)?;
        Ok(Task {
            id: row.get(0)?,
            project: row.get(1)?,
            employee: row.get(2)?,
            status: status
                .parse()
                .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, e.into()))?,
            start_date: row.get(4)?,
            due_date: row.get(5)?,
            completed_date: row.get::<_, Option<String>>(6)?.filter(|d| !d.is_empty()),
            priority: priority
                .parse()
                .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, e.into()))?,
        })
    }

    /// Insert validation policy.
    ///
    /// Project and employee must be non-empty, start and due dates must
    /// be ISO calendar dates with the due date not preceding the start
    /// date, and a completed date, when present, must parse as well.
    /// The completed date is never required, not even for completed
    /// tasks; the status column alone is authoritative.
    fn validate(task: &Task) -> Result<(), StoreError> {
        if task.project.trim().is_empty() {
            return Err(StoreError::validation("project must not be empty"));
        }
        if task.employee.trim().is_empty() {
            return Err(StoreError::validation("employee must not be empty"));
        }
        let start = NaiveDate::parse_from_str(&task.start_date, DATE_FORMAT)
            .map_err(|_| StoreError::validation(format!("start date '{}' is not a valid calendar date", task.start_date)))?;
        let due = NaiveDate::parse_from_str(&task.due_date, DATE_FORMAT)
            .map_err(|_| StoreError::validation(format!("due date '{}' is not a valid calendar date", task.due_date)))?;
        if due < start {
            return Err(StoreError::validation("due date must not precede start date"));
        }
        if let Some(completed) = task.completed_date.as_deref() {
            if !completed.is_empty() && NaiveDate::parse_from_str(completed, DATE_FORMAT).is_err() {
                return Err(StoreError::validation(format!("completed date '{}' is not a valid calendar date", completed)));
            }
        }
        Ok(())
    }
}
