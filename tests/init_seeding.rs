#[cfg(test)]
mod tests {
    use tasklite::db::categories::Categories;
    use tasklite::db::db::Db;
    use tasklite::db::migrations;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct InitTestContext {
        temp_dir: TempDir,
    }

    impl InitTestContext {
        fn open(&self) -> Db {
            Db::open(&self.temp_dir.path().join("tasklite.db")).unwrap()
        }
    }

    impl TestContext for InitTestContext {
        fn setup() -> Self {
            InitTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_initialization_is_idempotent(ctx: &mut InitTestContext) {
        // Open the same database several times; seeding must run once
        for _ in 0..3 {
            ctx.open();
        }

        let mut categories = Categories::with_db(ctx.open());
        let all = categories.get_all().unwrap();
        assert_eq!(all.len(), 4);

        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Courses", "Etudes", "Personnel", "Travail"]);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_default_category_colors(ctx: &mut InitTestContext) {
        let mut categories = Categories::with_db(ctx.open());
        let all = categories.get_all().unwrap();

        let color_of = |name: &str| all.iter().find(|c| c.name == name).unwrap().color.clone();
        assert_eq!(color_of("Travail"), "#3B82F6");
        assert_eq!(color_of("Personnel"), "#10B981");
        assert_eq!(color_of("Courses"), "#F59E0B");
        assert_eq!(color_of("Etudes"), "#8B5CF6");
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_defaults_share_one_creation_timestamp(ctx: &mut InitTestContext) {
        let mut categories = Categories::with_db(ctx.open());
        let all = categories.get_all().unwrap();

        let first = all[0].created_at;
        assert!(all.iter().all(|c| c.created_at == first));
        assert!(all.iter().all(|c| c.updated_at == c.created_at));
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_seeding_only_fires_on_empty_table(ctx: &mut InitTestContext) {
        let mut categories = Categories::with_db(ctx.open());
        let all = categories.get_all().unwrap();
        categories.delete(&all[0].id).unwrap();

        // Reopening must not re-create the deleted default
        let mut categories = Categories::with_db(ctx.open());
        assert_eq!(categories.get_all().unwrap().len(), 3);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_schema_is_current_after_open(ctx: &mut InitTestContext) {
        let db = ctx.open();
        assert_eq!(migrations::get_db_version(&db.conn).unwrap(), 2);
        assert!(!migrations::needs_migration(&db.conn).unwrap());
    }
}
