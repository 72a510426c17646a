//! Task CRUD operations, filtered listing and statistics.
//!
//! Listing left-joins the category so standalone tasks come back with an
//! explicit `None` category. Filters are conjunctive equality matches; an
//! empty filter returns everything, newest first.
//!
//! Updates are partial: only supplied fields change. The one piece of
//! derived-field logic lives here on purpose — whenever an update supplies a
//! status, `completed_at` is recomputed from it (DONE stamps the current
//! time, anything else clears it) and a caller-supplied `completed_at` is
//! ignored, so no code path can produce a DONE task without a completion
//! timestamp.

use crate::db::db::Db;
use crate::db::mapper;
use crate::libs::ident;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, PriorityBreakdown, StatusBreakdown, Task, TaskFilter, TaskStats, TaskStatus, TaskUpdate};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, ToSql};

const INSERT_TASK: &str = "
    INSERT INTO tasks (id, title, description, status, priority, due_date, category_id, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "
    SELECT t.id, t.title, t.description, t.status, t.priority, t.due_date,
           t.position, t.completed_at, t.created_at, t.updated_at,
           c.id, c.name, c.color
    FROM tasks t
    LEFT JOIN categories c ON c.id = t.category_id
";
const ORDER_BY_NEWEST: &str = "ORDER BY t.created_at DESC";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_COMPLETED: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'DONE'";
const GROUP_BY_STATUS: &str = "SELECT status, COUNT(*) FROM tasks GROUP BY status";
const GROUP_BY_PRIORITY: &str = "SELECT priority, COUNT(*) FROM tasks GROUP BY priority";

pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    /// Builds a manager around an already opened database. Used by callers
    /// that control the database location, such as tests.
    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Creates a task and returns the stored row.
    ///
    /// A `category_id` pointing at no existing category is rejected by the
    /// foreign key at write time. `completed_at` always starts NULL; it is
    /// only ever set by a status update.
    pub fn create(&mut self, task: &NewTask) -> Result<Task> {
        let id = ident::generate();
        let now = mapper::to_epoch_ms(Utc::now());

        self.db.conn.execute(
            INSERT_TASK,
            params![
                id,
                task.title,
                task.description,
                task.status.as_str(),
                task.priority.as_str(),
                task.due_date.map(mapper::to_epoch_ms),
                task.category_id,
                now
            ],
        )?;

        self.get_by_id(&id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id)))
    }

    /// Tasks matching the conjunction of all supplied filters, with their
    /// categories, ordered by creation time descending.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(status) = filter.status {
            values.push(Box::new(status.to_string()));
            conditions.push(format!("t.status = ?{}", values.len()));
        }
        if let Some(category_id) = &filter.category_id {
            values.push(Box::new(category_id.clone()));
            conditions.push(format!("t.category_id = ?{}", values.len()));
        }
        if let Some(priority) = filter.priority {
            values.push(Box::new(priority.to_string()));
            conditions.push(format!("t.priority = ?{}", values.len()));
        }

        let sql = if conditions.is_empty() {
            format!("{} {}", SELECT_TASKS, ORDER_BY_NEWEST)
        } else {
            format!("{} WHERE {} {}", SELECT_TASKS, conditions.join(" AND "), ORDER_BY_NEWEST)
        };

        let mut stmt = self.db.conn.prepare(&sql)?;
        let value_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let task_iter = stmt.query_map(&value_refs[..], |row| mapper::map_task_row(row))?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// One task with its category, or `None` when absent.
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Task>> {
        let sql = format!("{} WHERE t.id = ?1", SELECT_TASKS);
        self.db
            .conn
            .query_row(&sql, params![id], |row| mapper::map_task_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// Applies a partial update and returns the stored row.
    ///
    /// `updated_at` refreshes on every call, including an empty update.
    /// A supplied `status` drives `completed_at` (see module docs).
    pub fn update(&mut self, id: &str, update: &TaskUpdate) -> Result<Task> {
        let now = Utc::now();
        let mut sets: Vec<String> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &update.title {
            values.push(Box::new(title.clone()));
            sets.push(format!("title = ?{}", values.len()));
        }
        if let Some(description) = &update.description {
            values.push(Box::new(description.clone()));
            sets.push(format!("description = ?{}", values.len()));
        }
        if let Some(priority) = update.priority {
            values.push(Box::new(priority.to_string()));
            sets.push(format!("priority = ?{}", values.len()));
        }
        if let Some(due_date) = &update.due_date {
            values.push(Box::new(due_date.map(mapper::to_epoch_ms)));
            sets.push(format!("due_date = ?{}", values.len()));
        }
        if let Some(category_id) = &update.category_id {
            values.push(Box::new(category_id.clone()));
            sets.push(format!("category_id = ?{}", values.len()));
        }

        if let Some(status) = update.status {
            values.push(Box::new(status.to_string()));
            sets.push(format!("status = ?{}", values.len()));

            // completed_at follows the status transition; a caller-supplied
            // value cannot override it
            let completed_at = (status == TaskStatus::Done).then(|| mapper::to_epoch_ms(now));
            values.push(Box::new(completed_at));
            sets.push(format!("completed_at = ?{}", values.len()));
        } else if let Some(completed_at) = &update.completed_at {
            values.push(Box::new(completed_at.map(mapper::to_epoch_ms)));
            sets.push(format!("completed_at = ?{}", values.len()));
        }

        values.push(Box::new(mapper::to_epoch_ms(now)));
        sets.push(format!("updated_at = ?{}", values.len()));

        values.push(Box::new(id.to_string()));
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{}", sets.join(", "), values.len());

        let value_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let affected = self.db.conn.execute(&sql, &value_refs[..])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }

        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id.to_string())))
    }

    /// Hard delete, no tombstoning.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.db.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Aggregate statistics over all tasks.
    pub fn stats(&mut self) -> Result<TaskStats> {
        let total_tasks: i64 = self.db.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        let completed_tasks: i64 = self.db.conn.query_row(COUNT_COMPLETED, [], |row| row.get(0))?;

        let mut status_breakdown = StatusBreakdown::default();
        let mut stmt = self.db.conn.prepare(GROUP_BY_STATUS)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
        for row in rows {
            let (status, count) = row?;
            match status.parse::<TaskStatus>()? {
                TaskStatus::Todo => status_breakdown.todo = count,
                TaskStatus::InProgress => status_breakdown.in_progress = count,
                TaskStatus::Done => status_breakdown.done = count,
                TaskStatus::Cancelled => status_breakdown.cancelled = count,
            }
        }
        drop(stmt);

        let mut priority_breakdown = PriorityBreakdown::default();
        let mut stmt = self.db.conn.prepare(GROUP_BY_PRIORITY)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
        for row in rows {
            let (priority, count) = row?;
            match priority.parse::<Priority>()? {
                Priority::Low => priority_breakdown.low = count,
                Priority::Medium => priority_breakdown.medium = count,
                Priority::High => priority_breakdown.high = count,
                Priority::Urgent => priority_breakdown.urgent = count,
            }
        }
        drop(stmt);

        let completion_rate = if total_tasks > 0 {
            ((completed_tasks as f64 / total_tasks as f64) * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Ok(TaskStats {
            total_tasks,
            completed_tasks,
            completion_rate,
            status_breakdown,
            priority_breakdown,
        })
    }
}
