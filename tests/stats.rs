#[cfg(test)]
mod tests {
    use tasklite::db::db::Db;
    use tasklite::db::tasks::Tasks;
    use tasklite::libs::task::{NewTask, Priority, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DbTestContext {
        temp_dir: TempDir,
    }

    impl DbTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::with_db(Db::open(&self.temp_dir.path().join("tasklite.db")).unwrap())
        }
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            DbTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn complete(tasks: &mut Tasks, id: &str) {
        let update = TaskUpdate {
            status: Some(TaskStatus::Done),
            ..TaskUpdate::default()
        };
        tasks.update(id, &update).unwrap();
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_stats_on_empty_database(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let stats = tasks.stats().unwrap();

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.status_breakdown.todo, 0);
        assert_eq!(stats.status_breakdown.in_progress, 0);
        assert_eq!(stats.status_breakdown.done, 0);
        assert_eq!(stats.status_breakdown.cancelled, 0);
        assert_eq!(stats.priority_breakdown.low, 0);
        assert_eq!(stats.priority_breakdown.medium, 0);
        assert_eq!(stats.priority_breakdown.high, 0);
        assert_eq!(stats.priority_breakdown.urgent, 0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_completion_rate_is_exact_for_round_ratios(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(tasks.create(&NewTask::new(&format!("tache {}", i))).unwrap().id);
        }
        for id in ids.iter().take(3) {
            complete(&mut tasks, id);
        }

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.total_tasks, 10);
        assert_eq!(stats.completed_tasks, 3);
        assert_eq!(stats.completion_rate, 30.0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_completion_rate_rounds_to_two_decimals(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        let mut ids = Vec::new();
        for i in 0..3 {
            ids.push(tasks.create(&NewTask::new(&format!("tache {}", i))).unwrap().id);
        }
        complete(&mut tasks, &ids[0]);

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.completion_rate, 33.33);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_breakdowns_count_every_group(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();

        let cases = [
            (TaskStatus::Todo, Priority::Low),
            (TaskStatus::Todo, Priority::Urgent),
            (TaskStatus::InProgress, Priority::Medium),
            (TaskStatus::Done, Priority::High),
            (TaskStatus::Cancelled, Priority::High),
        ];
        for (i, (status, priority)) in cases.iter().enumerate() {
            let mut task = NewTask::new(&format!("tache {}", i));
            task.status = *status;
            task.priority = *priority;
            tasks.create(&task).unwrap();
        }

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.total_tasks, 5);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.completion_rate, 20.0);

        assert_eq!(stats.status_breakdown.todo, 2);
        assert_eq!(stats.status_breakdown.in_progress, 1);
        assert_eq!(stats.status_breakdown.done, 1);
        assert_eq!(stats.status_breakdown.cancelled, 1);

        assert_eq!(stats.priority_breakdown.low, 1);
        assert_eq!(stats.priority_breakdown.medium, 1);
        assert_eq!(stats.priority_breakdown.high, 2);
        assert_eq!(stats.priority_breakdown.urgent, 1);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_stats_serialize_to_json(ctx: &mut DbTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&NewTask::new("exportable")).unwrap();

        let stats = tasks.stats().unwrap();
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["total_tasks"], 1);
        assert_eq!(json["completed_tasks"], 0);
        assert_eq!(json["status_breakdown"]["todo"], 1);
    }
}
