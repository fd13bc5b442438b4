#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use taskdash::db::db::Db;
    use taskdash::db::tasks::Tasks;
    use taskdash::libs::task::{Task, TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests share process environment variables, so they take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct InitTestContext {
        _temp_dir: TempDir,
        _lock: MutexGuard<'static, ()>,
    }

    impl TestContext for InitTestContext {
        fn setup() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            InitTestContext {
                _temp_dir: temp_dir,
                _lock: lock,
            }
        }
    }

    fn all_tasks() -> Vec<Task> {
        Tasks::new().unwrap().fetch(TaskFilter::default()).unwrap()
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_first_init_loads_seed_fixture(_ctx: &mut InitTestContext) {
        Db::init(false).unwrap();

        let tasks = all_tasks();
        assert_eq!(tasks.len(), 6);
        let ids: Vec<i64> = tasks.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let first = &tasks[0];
        assert_eq!(first.project, "Alpha");
        assert_eq!(first.employee, "Anurag");
        assert_eq!(first.status, TaskStatus::Completed);
        assert_eq!(first.completed_date.as_deref(), Some("2024-06-04"));

        // Non-completed seed rows carry the empty completed-date sentinel.
        assert!(tasks[1].completed_date.is_none());
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_without_reset_is_idempotent(_ctx: &mut InitTestContext) {
        Db::init(false).unwrap();
        Db::init(false).unwrap();

        assert_eq!(all_tasks().len(), 6);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_keeps_user_data_without_reset(_ctx: &mut InitTestContext) {
        Db::init(false).unwrap();

        let task = Task::new(
            "Delta",
            "Maya",
            TaskStatus::Pending,
            "2024-07-01",
            "2024-07-10",
            None,
            taskdash::libs::task::Priority::Low,
        );
        Tasks::new().unwrap().insert(&task).unwrap();
        assert_eq!(all_tasks().len(), 7);

        Db::init(false).unwrap();
        assert_eq!(all_tasks().len(), 7);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_with_reset_restores_seed_fixture(_ctx: &mut InitTestContext) {
        Db::init(false).unwrap();

        let task = Task::new(
            "Delta",
            "Maya",
            TaskStatus::Pending,
            "2024-07-01",
            "2024-07-10",
            None,
            taskdash::libs::task::Priority::Low,
        );
        Tasks::new().unwrap().insert(&task).unwrap();
        assert_eq!(all_tasks().len(), 7);

        Db::init(true).unwrap();
        assert_eq!(all_tasks().len(), 6);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_emptied_table_is_not_reseeded(_ctx: &mut InitTestContext) {
        Db::init(false).unwrap();

        let mut tasks = Tasks::new().unwrap();
        for id in 1..=6 {
            assert_eq!(tasks.delete(id).unwrap(), 1);
        }

        Db::init(false).unwrap();
        assert_eq!(all_tasks().len(), 0);
    }
}
