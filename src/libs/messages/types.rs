//! Structured user-facing messages.
//!
//! Every piece of text the CLI prints is a variant here, so wording
//! lives in one place and callers stay free of string literals. The
//! human-readable form is produced by the `Display` implementation in
//! [`super::display`].

#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DbInitialized,
    DbReset,

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskStatusUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksFound,
    OverdueHeader(String),
    NoOverdueTasks,

    // === LOGIN MESSAGES ===
    LoginSuccess(String),
    InvalidCredentials,
    NotLoggedIn,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === SUMMARY MESSAGES ===
    SummaryHeader,

    // === EXPORT MESSAGES ===
    ExportSuccess(String),
    ExportNothingToExport,
}
