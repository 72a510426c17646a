#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use std::thread::sleep;
    use std::time::Duration;
    use tasklite::db::categories::Categories;
    use tasklite::db::db::Db;
    use tasklite::db::tasks::Tasks;
    use tasklite::libs::task::{NewTask, Priority, Task, TaskFilter, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DbTestContext {
        temp_dir: TempDir,
    }

    impl DbTestContext {
        fn db(&self) -> Db {
            Db::open(&self.temp_dir.path().join("tasklite.db")).unwrap()
        }

        fn categories(&self) -> Categories {
            Categories::with_db(self.db())
        }

        fn tasks(&self) -> Tasks {
            Tasks::with_db(self.db())
        }
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            DbTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn due(epoch_ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(epoch_ms).unwrap()
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_create_task_defaults(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Faire les courses")).unwrap();

        assert_eq!(created.title, "Faire les courses");
        assert_eq!(created.status, TaskStatus::Todo);
        assert_eq!(created.priority, Priority::Medium);
        assert!(created.description.is_none());
        assert!(created.due_date.is_none());
        assert!(created.completed_at.is_none());
        assert!(created.category.is_none());
        assert_eq!(created.position, 0);
        assert_eq!(created.updated_at, created.created_at);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_create_task_round_trip(ctx: &mut DbTestContext) {
        let mut categories = ctx.categories();
        let category = categories.create("Sport", Some("#EF4444")).unwrap();

        let mut task = NewTask::new("Courir 10km");
        task.description = Some("Parc au lever du soleil".to_string());
        task.status = TaskStatus::InProgress;
        task.priority = Priority::High;
        task.due_date = Some(due(1_893_456_000_000));
        task.category_id = Some(category.id.clone());

        let mut tasks = ctx.tasks();
        let created = tasks.create(&task).unwrap();
        let stored = tasks.get_by_id(&created.id).unwrap().unwrap();

        assert_eq!(stored.title, "Courir 10km");
        assert_eq!(stored.description.as_deref(), Some("Parc au lever du soleil"));
        assert_eq!(stored.status, TaskStatus::InProgress);
        assert_eq!(stored.priority, Priority::High);
        assert_eq!(stored.due_date, Some(due(1_893_456_000_000)));

        let category_ref = stored.category.unwrap();
        assert_eq!(category_ref.id, category.id);
        assert_eq!(category_ref.name, "Sport");
        assert_eq!(category_ref.color, "#EF4444");
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_dangling_category_is_rejected_at_write(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let mut task = NewTask::new("Orpheline");
        task.category_id = Some("no-such-category".to_string());
        assert!(tasks.create(&task).is_err());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_fetch_orders_newest_first(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        for title in ["premiere", "deuxieme", "troisieme"] {
            tasks.create(&NewTask::new(title)).unwrap();
            sleep(Duration::from_millis(5));
        }

        let titles: Vec<String> = tasks
            .fetch(&TaskFilter::default())
            .unwrap()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, vec!["troisieme", "deuxieme", "premiere"]);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_filters_are_conjunctive(ctx: &mut DbTestContext) {
        let mut categories = ctx.categories();
        let sport = categories.create("Sport", None).unwrap();

        let mut tasks = ctx.tasks();

        let mut a = NewTask::new("a");
        a.status = TaskStatus::Todo;
        a.priority = Priority::High;
        a.category_id = Some(sport.id.clone());
        tasks.create(&a).unwrap();

        let mut b = NewTask::new("b");
        b.status = TaskStatus::Done;
        b.priority = Priority::High;
        b.category_id = Some(sport.id.clone());
        tasks.create(&b).unwrap();

        let mut c = NewTask::new("c");
        c.status = TaskStatus::Todo;
        c.priority = Priority::High;
        tasks.create(&c).unwrap();

        let filter = TaskFilter {
            status: Some(TaskStatus::Todo),
            priority: Some(Priority::High),
            category_id: Some(sport.id.clone()),
        };
        let matched = tasks.fetch(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "a");

        // An empty filter returns every task
        assert_eq!(tasks.fetch(&TaskFilter::default()).unwrap().len(), 3);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_partial_update_clears_description(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let mut task = NewTask::new("Nettoyer");
        task.description = Some("la cuisine".to_string());
        let created = tasks.create(&task).unwrap();

        let update = TaskUpdate {
            description: Some(None),
            ..TaskUpdate::default()
        };
        let updated = tasks.update(&created.id, &update).unwrap();

        assert!(updated.description.is_none());
        assert_eq!(updated.title, "Nettoyer");
        assert_eq!(updated.status, created.status);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_empty_update_only_refreshes_updated_at(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Inchangee")).unwrap();

        sleep(Duration::from_millis(5));
        let updated = tasks.update(&created.id, &TaskUpdate::default()).unwrap();

        assert_eq!(updated.title, created.title);
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_done_transition_stamps_completed_at(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Terminer")).unwrap();

        let update = TaskUpdate {
            status: Some(TaskStatus::Done),
            ..TaskUpdate::default()
        };
        let done = tasks.update(&created.id, &update).unwrap();

        assert_eq!(done.status, TaskStatus::Done);
        let completed_at = done.completed_at.unwrap();
        assert!(completed_at >= created.created_at);
        assert!(completed_at <= Utc::now());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_leaving_done_clears_completed_at(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Rouvrir")).unwrap();

        let done = TaskUpdate {
            status: Some(TaskStatus::Done),
            ..TaskUpdate::default()
        };
        tasks.update(&created.id, &done).unwrap();

        let reopen = TaskUpdate {
            status: Some(TaskStatus::Todo),
            ..TaskUpdate::default()
        };
        let reopened = tasks.update(&created.id, &reopen).unwrap();

        assert_eq!(reopened.status, TaskStatus::Todo);
        assert!(reopened.completed_at.is_none());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_supplied_completed_at_loses_to_status(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Forcer")).unwrap();

        // The explicit timestamp must be ignored because a status is supplied
        let update = TaskUpdate {
            status: Some(TaskStatus::InProgress),
            completed_at: Some(Some(due(1_000_000_000_000))),
            ..TaskUpdate::default()
        };
        let updated = tasks.update(&created.id, &update).unwrap();
        assert!(updated.completed_at.is_none());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_completed_at_passes_through_without_status(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Antidater")).unwrap();

        let stamp = due(1_700_000_000_000);
        let update = TaskUpdate {
            completed_at: Some(Some(stamp)),
            ..TaskUpdate::default()
        };
        let updated = tasks.update(&created.id, &update).unwrap();

        assert_eq!(updated.completed_at, Some(stamp));
        assert_eq!(updated.status, TaskStatus::Todo);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_update_reassigns_and_clears_category(ctx: &mut DbTestContext) {
        let mut categories = ctx.categories();
        let sport = categories.create("Sport", None).unwrap();
        let maison = categories.create("Maison", None).unwrap();

        let mut tasks = ctx.tasks();
        let mut task = NewTask::new("Ranger le garage");
        task.category_id = Some(sport.id.clone());
        let created = tasks.create(&task).unwrap();

        let reassign = TaskUpdate {
            category_id: Some(Some(maison.id.clone())),
            ..TaskUpdate::default()
        };
        let updated = tasks.update(&created.id, &reassign).unwrap();
        assert_eq!(updated.category.as_ref().map(|c| c.name.as_str()), Some("Maison"));

        let clear = TaskUpdate {
            category_id: Some(None),
            ..TaskUpdate::default()
        };
        let updated = tasks.update(&created.id, &clear).unwrap();
        assert!(updated.category.is_none());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_update_unknown_task_fails(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let update = TaskUpdate {
            title: Some("Fantome".to_string()),
            ..TaskUpdate::default()
        };
        assert!(tasks.update("no-such-id", &update).is_err());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_delete_task(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let created = tasks.create(&NewTask::new("Ephemere")).unwrap();

        tasks.delete(&created.id).unwrap();
        assert!(tasks.get_by_id(&created.id).unwrap().is_none());
        assert!(tasks.delete(&created.id).is_err());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_generated_ids_are_unique(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let mut ids: Vec<String> = Vec::new();
        for i in 0..20 {
            let created: Task = tasks.create(&NewTask::new(&format!("tache {}", i))).unwrap();
            ids.push(created.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
