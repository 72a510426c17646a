use super::category::Category;
use super::task::{Task, TaskStats};
use chrono::{DateTime, Local, Utc};
use prettytable::{row, Table};

fn fmt_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub struct View {}

impl View {
    pub fn categories(categories: &[Category]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR", "TASKS", "CREATED"]);
        for category in categories {
            table.add_row(row![category.id, category.name, category.color, category.task_count, fmt_date(category.created_at)]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "CATEGORY", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.status,
                task.priority,
                task.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
                task.due_date.map(fmt_date).unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();
    }

    pub fn task_details(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.as_deref().unwrap_or("-")]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Category", task.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")]);
        table.add_row(row!["Due", task.due_date.map(fmt_date).unwrap_or_else(|| "-".to_string())]);
        table.add_row(row!["Completed", task.completed_at.map(fmt_date).unwrap_or_else(|| "-".to_string())]);
        table.add_row(row!["Created", fmt_date(task.created_at)]);
        table.add_row(row!["Updated", fmt_date(task.updated_at)]);
        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        let mut table = Table::new();

        table.add_row(row!["Total tasks", stats.total_tasks]);
        table.add_row(row!["Completed", stats.completed_tasks]);
        table.add_row(row!["Completion rate", format!("{:.2}%", stats.completion_rate)]);
        table.add_row(row!["TODO", stats.status_breakdown.todo]);
        table.add_row(row!["IN_PROGRESS", stats.status_breakdown.in_progress]);
        table.add_row(row!["DONE", stats.status_breakdown.done]);
        table.add_row(row!["CANCELLED", stats.status_breakdown.cancelled]);
        table.add_row(row!["LOW", stats.priority_breakdown.low]);
        table.add_row(row!["MEDIUM", stats.priority_breakdown.medium]);
        table.add_row(row!["HIGH", stats.priority_breakdown.high]);
        table.add_row(row!["URGENT", stats.priority_breakdown.urgent]);
        table.printstd();
    }
}
