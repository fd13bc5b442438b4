#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use taskdash::db::db::Db;
    use taskdash::db::users::{Authenticator, Users};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct AuthTestContext {
        _temp_dir: TempDir,
        _lock: MutexGuard<'static, ()>,
    }

    impl TestContext for AuthTestContext {
        fn setup() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            Db::init(false).unwrap();
            AuthTestContext {
                _temp_dir: temp_dir,
                _lock: lock,
            }
        }
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_seed_credential_authenticates(_ctx: &mut AuthTestContext) {
        let mut users = Users::new().unwrap();
        assert!(users.authenticate("admin", "admin123").unwrap());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_bad_credentials_fail_without_error(_ctx: &mut AuthTestContext) {
        let mut users = Users::new().unwrap();
        assert!(!users.authenticate("admin", "wrong").unwrap());
        assert!(!users.authenticate("nouser", "x").unwrap());
        assert!(!users.authenticate("admin", "").unwrap());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_match_is_case_sensitive(_ctx: &mut AuthTestContext) {
        let mut users = Users::new().unwrap();
        assert!(!users.authenticate("Admin", "admin123").unwrap());
        assert!(!users.authenticate("admin", "ADMIN123").unwrap());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_reinit_does_not_duplicate_credential(_ctx: &mut AuthTestContext) {
        Db::init(false).unwrap();
        let db = Db::new().unwrap();
        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
