#[derive(Debug, Clone)]
pub enum Message {
    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryUpdated(String),
    CategoryDeleted(String),
    CategoryNotFound(String),
    CategoryAlreadyExists(String),
    NoCategoriesFound,
    CategoryListHeader,
    EditingCategory(String),
    ConfirmDeleteCategory(String),
    ConfirmDeleteCategoryWithTasks(String, i64), // name, task count
    SelectCategoryAction,
    SelectCategoryToEdit,
    SelectCategoryToDelete,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskNotFound(String),
    NoTasksFound,
    TaskListHeader,
    TaskDetailsHeader,
    EditingTask(String),
    NoChangesDetected,
    ConfirmDeleteTask(String),
    InvalidDueDate(String),

    // === STATS MESSAGES ===
    StatsHeader,
    NoTasksForStats,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWizardHeader,
    PromptDefaultCategory,
    PromptDefaultPriority,

    // === DATABASE MESSAGES ===
    DbInitialized,
    DefaultCategoriesSeeded(usize),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,

    // === PROMPTS ===
    PromptCategoryName,
    PromptCategoryColor,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptTaskCategory,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
