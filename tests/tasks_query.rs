#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use taskdash::db::db::Db;
    use taskdash::db::tasks::Tasks;
    use taskdash::libs::task::{TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Context seeding the canonical 6-row fixture via `Db::init`.
    struct QueryTestContext {
        _temp_dir: TempDir,
        _lock: MutexGuard<'static, ()>,
    }

    impl TestContext for QueryTestContext {
        fn setup() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            Db::init(false).unwrap();
            QueryTestContext {
                _temp_dir: temp_dir,
                _lock: lock,
            }
        }
    }

    fn ids(tasks: &[taskdash::libs::task::Task]) -> Vec<i64> {
        tasks.iter().filter_map(|t| t.id).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_empty_filter_returns_everything(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert_eq!(ids(&tasks.fetch(TaskFilter::default()).unwrap()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_by_status(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let filter = TaskFilter {
            statuses: vec![TaskStatus::Pending],
            ..Default::default()
        };
        let pending = tasks.fetch(filter).unwrap();
        assert_eq!(ids(&pending), vec![2, 4]);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_allows_multiple_values_per_field(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let filter = TaskFilter {
            employees: vec!["Anurag".to_string(), "Ravi".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&tasks.fetch(filter).unwrap()), vec![1, 2, 3, 5, 6]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_fields_combine_with_and(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let filter = TaskFilter {
            statuses: vec![TaskStatus::InProgress],
            employees: vec!["Ravi".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&tasks.fetch(filter).unwrap()), vec![6]);

        let filter = TaskFilter {
            employees: vec!["Anurag".to_string()],
            projects: vec!["Beta".to_string()],
            ..Default::default()
        };
        let rows = tasks.fetch(filter).unwrap();
        assert_eq!(ids(&rows), vec![5]);
        assert!(rows.iter().all(|t| t.employee == "Anurag" && t.project == "Beta"));
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_with_unknown_value_matches_nothing(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let filter = TaskFilter {
            projects: vec!["Omega".to_string()],
            ..Default::default()
        };
        assert!(tasks.fetch(filter).unwrap().is_empty());
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_empty_text_returns_all_rows(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert_eq!(tasks.search("").unwrap().len(), 6);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_is_case_insensitive(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let hits = tasks.search("ANU").unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|t| t.employee == "Anurag"));

        // Matches the project column as well.
        assert_eq!(ids(&tasks.search("alp").unwrap()), vec![1, 3]);
        assert!(tasks.search("zzz").unwrap().is_empty());
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_overdue_uses_strict_date_comparison(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // Due dates of 2024-06-10 and 2024-06-07 precede the reference;
        // a task due exactly on the reference date is not overdue.
        assert_eq!(ids(&tasks.find_overdue(date(2024, 6, 11)).unwrap()), vec![2, 4]);
        assert_eq!(ids(&tasks.find_overdue(date(2024, 6, 10)).unwrap()), vec![4]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_overdue_never_contains_completed_tasks(_ctx: &mut QueryTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let overdue = tasks.find_overdue(date(2030, 1, 1)).unwrap();
        assert_eq!(ids(&overdue), vec![2, 3, 4, 6]);
        assert!(overdue.iter().all(|t| t.status != TaskStatus::Completed));
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_overdue_skips_unparseable_due_dates(_ctx: &mut QueryTestContext) {
        // Rows written outside the validated insert path may carry
        // empty or garbage dates; they must be skipped, not crash.
        let db = Db::new().unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (project, employee, status, start_date, due_date, completed_date, priority)
                 VALUES ('Legacy', 'Maya', 'Pending', '', '', '', 'Low')",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (project, employee, status, start_date, due_date, completed_date, priority)
                 VALUES ('Legacy', 'Maya', 'Pending', '2024-06-01', 'whenever', '', 'Low')",
                [],
            )
            .unwrap();

        let mut tasks = Tasks::new().unwrap();
        assert_eq!(tasks.fetch(TaskFilter::default()).unwrap().len(), 8);
        let overdue = tasks.find_overdue(date(2030, 1, 1)).unwrap();
        assert!(overdue.iter().all(|t| t.project != "Legacy"));
    }
}
