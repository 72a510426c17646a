//! Category domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display color assigned to categories created without an explicit color.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// A category with its live task count.
///
/// `task_count` is never stored; it is computed at read time as the number
/// of tasks currently referencing the category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub task_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The slice of a category carried on a joined task row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Partial update for a category. Omitted fields keep their stored value.
/// Even an empty update refreshes `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}
