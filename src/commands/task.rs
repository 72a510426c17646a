use crate::db::categories::Categories;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, TaskFilter, TaskStatus, TaskUpdate};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    New {
        /// Task title
        title: String,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Initial status (TODO, IN_PROGRESS, DONE, CANCELLED)
        #[arg(short, long)]
        status: Option<String>,
        /// Priority (LOW, MEDIUM, HIGH, URGENT)
        #[arg(short, long)]
        priority: Option<String>,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List tasks, optionally filtered
    List {
        /// Only tasks with this status
        #[arg(short, long)]
        status: Option<String>,
        /// Only tasks with this priority
        #[arg(short, long)]
        priority: Option<String>,
        /// Only tasks in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one task in full
    Show {
        /// Task ID
        id: String,
    },
    /// Edit a task interactively
    Edit {
        /// Task ID
        id: String,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::New {
            title,
            description,
            status,
            priority,
            due,
            category,
        } => handle_new(title, description, status, priority, due, category),
        TaskCommand::List { status, priority, category } => handle_list(status, priority, category),
        TaskCommand::Show { id } => handle_show(id),
        TaskCommand::Edit { id } => handle_edit(id),
        TaskCommand::Done { id } => handle_done(id),
        TaskCommand::Delete { id } => handle_delete(id),
    }
}

fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => msg_bail_anyhow!(Message::InvalidDueDate(raw.to_string())),
    }
}

/// Resolves a `--category` argument (name or id) to a category id.
fn resolve_category_id(identifier: &str) -> Result<String> {
    let mut categories_db = Categories::new()?;
    if let Some(category) = categories_db.get_by_id(identifier)? {
        return Ok(category.id);
    }
    match categories_db.get_by_name(identifier)? {
        Some(category) => Ok(category.id),
        None => msg_bail_anyhow!(Message::CategoryNotFound(identifier.to_string())),
    }
}

fn handle_new(
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let config = Config::read()?;

    let mut task = NewTask::new(&title);
    task.description = description;
    if let Some(status) = status {
        task.status = status.parse::<TaskStatus>()?;
    }
    if let Some(priority) = priority {
        task.priority = priority.parse::<Priority>()?;
    } else if let Some(default) = config.default_priority {
        task.priority = default;
    }
    if let Some(due) = due {
        task.due_date = Some(parse_due(&due)?);
    }
    if let Some(category) = category.or(config.default_category) {
        task.category_id = Some(resolve_category_id(&category)?);
    }

    Tasks::new()?.create(&task)?;
    msg_success!(Message::TaskCreated(title));
    Ok(())
}

fn handle_list(status: Option<String>, priority: Option<String>, category: Option<String>) -> Result<()> {
    let mut filter = TaskFilter::default();
    if let Some(status) = status {
        filter.status = Some(status.parse::<TaskStatus>()?);
    }
    if let Some(priority) = priority {
        filter.priority = Some(priority.parse::<Priority>()?);
    }
    if let Some(category) = category {
        filter.category_id = Some(resolve_category_id(&category)?);
    }

    let tasks = Tasks::new()?.fetch(&filter)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader, true);
    View::tasks(&tasks);
    Ok(())
}

fn handle_show(id: String) -> Result<()> {
    let task = match Tasks::new()?.get_by_id(&id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    msg_print!(Message::TaskDetailsHeader, true);
    View::task_details(&task);
    Ok(())
}

fn handle_edit(id: String) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get_by_id(&id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let status: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .default(task.status.to_string())
        .interact_text()?;

    let priority: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(task.priority.to_string())
        .interact_text()?;

    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let current_category = task.category.as_ref().map(|c| c.name.clone()).unwrap_or_default();
    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .default(current_category.clone())
        .allow_empty(true)
        .interact_text()?;

    let new_status = status.parse::<TaskStatus>()?;
    let new_priority = priority.parse::<Priority>()?;
    let new_description = if description.is_empty() { None } else { Some(description) };
    let new_due = if due.is_empty() { None } else { Some(parse_due(&due)?) };
    let new_category = if category == current_category {
        None
    } else if category.is_empty() {
        Some(None)
    } else {
        Some(Some(resolve_category_id(&category)?))
    };

    let update = TaskUpdate {
        title: (title != task.title).then_some(title),
        description: (new_description != task.description).then_some(new_description),
        status: (new_status != task.status).then_some(new_status),
        priority: (new_priority != task.priority).then_some(new_priority),
        due_date: (new_due != task.due_date).then_some(new_due),
        category_id: new_category,
        ..TaskUpdate::default()
    };

    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = tasks_db.update(&task.id, &update)?;
    msg_success!(Message::TaskUpdated(updated.title));
    Ok(())
}

fn handle_done(id: String) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    // Marking done routes through the regular update path, which stamps
    // completed_at from the status transition
    let update = TaskUpdate {
        status: Some(TaskStatus::Done),
        ..TaskUpdate::default()
    };

    let updated = tasks_db.update(&id, &update)?;
    msg_success!(Message::TaskCompleted(updated.title));
    Ok(())
}

fn handle_delete(id: String) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get_by_id(&id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        tasks_db.delete(&task.id)?;
        msg_success!(Message::TaskDeleted(task.id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}
