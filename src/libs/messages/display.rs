//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one place, so message wording
//! stays consistent and the rest of the code works with the structured
//! [`Message`] enum instead of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryUpdated(name) => format!("Category '{}' updated", name),
            Message::CategoryDeleted(name) => format!("Category '{}' deleted, its tasks are now uncategorized", name),
            Message::CategoryNotFound(ident) => format!("Category '{}' not found", ident),
            Message::CategoryAlreadyExists(name) => format!("A category named '{}' already exists", name),
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::CategoryListHeader => "🗂 Categories".to_string(),
            Message::EditingCategory(name) => format!("Editing category '{}'", name),
            Message::ConfirmDeleteCategory(name) => format!("Delete category '{}'?", name),
            Message::ConfirmDeleteCategoryWithTasks(name, count) => {
                format!("Delete category '{}'? {} task(s) will become uncategorized", name, count)
            }
            Message::SelectCategoryAction => "What would you like to do?".to_string(),
            Message::SelectCategoryToEdit => "Select a category to edit".to_string(),
            Message::SelectCategoryToDelete => "Select a category to delete".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(title) => format!("Task '{}' marked as done", title),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TaskListHeader => "📋 Tasks".to_string(),
            Message::TaskDetailsHeader => "📋 Task details".to_string(),
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),

            // === STATS MESSAGES ===
            Message::StatsHeader => "📊 Task statistics".to_string(),
            Message::NoTasksForStats => "No tasks yet, nothing to report".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWizardHeader => "⚙️ Tasklite configuration".to_string(),
            Message::PromptDefaultCategory => "Default category for new tasks (empty for none)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks (empty for MEDIUM)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbInitialized => "Database initialized".to_string(),
            Message::DefaultCategoriesSeeded(count) => format!("Seeded {} default categories", count),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs migration".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations applied".to_string(),

            // === PROMPTS ===
            Message::PromptCategoryName => "Category name".to_string(),
            Message::PromptCategoryColor => "Category color (hex)".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (empty to clear)".to_string(),
            Message::PromptTaskStatus => "Status (TODO, IN_PROGRESS, DONE, CANCELLED)".to_string(),
            Message::PromptTaskPriority => "Priority (LOW, MEDIUM, HIGH, URGENT)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty to clear)".to_string(),
            Message::PromptTaskCategory => "Category name (empty for none)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", message)
    }
}
