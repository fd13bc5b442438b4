//! Display implementation turning [`Message`] variants into terminal
//! text. All user-facing wording is defined here and nowhere else.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbInitialized => "Database initialized".to_string(),
            Message::DbReset => "Existing database removed, starting from a clean slate".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID {}", id),
            Message::TaskStatusUpdated(id) => format!("Status updated for task {}", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::OverdueHeader(date) => format!("Overdue tasks as of {}:", date),
            Message::NoOverdueTasks => "No overdue tasks".to_string(),

            // === LOGIN MESSAGES ===
            Message::LoginSuccess(username) => format!("Logged in as {}", username),
            Message::InvalidCredentials => "Invalid credentials".to_string(),
            Message::NotLoggedIn => "Not logged in. Run 'taskdash login' first.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader => "📊 Summary".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNothingToExport => "Nothing to export".to_string(),
        };
        write!(f, "{}", text)
    }
}
