//! Database connection handling and first-run seeding.
//!
//! [`Db`] is an explicitly owned connection: opening it runs pending
//! migrations and seeds the default categories, so a constructed `Db` always
//! points at a fully initialized database. Entity managers receive a `Db` by
//! construction instead of sharing hidden global state, which keeps the
//! open-and-initialize sequence a plain, testable code path.

use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::ident;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, TransactionBehavior};
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasklite.db";

/// Categories inserted on first run, in seed order. Listing is alphabetical,
/// so the display order differs.
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Travail", "#3B82F6"),    // Blue
    ("Personnel", "#10B981"),  // Green
    ("Courses", "#F59E0B"),    // Amber
    ("Etudes", "#8B5CF6"),     // Purple
];

const INSERT_DEFAULT_CATEGORY: &str = "INSERT OR IGNORE INTO categories (id, name, color, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its platform data directory location.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path, applying pending migrations
    /// and seeding defaults. Safe to call any number of times.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;

        // ON DELETE SET NULL only fires with foreign keys enabled, and the
        // pragma is per-connection.
        conn.pragma_update(None, "foreign_keys", true)?;

        migrations::init_with_migrations(&mut conn)?;
        seed_default_categories(&mut conn)?;

        Ok(Db { conn })
    }
}

/// Inserts the default categories when the table is empty.
///
/// The existence check and the inserts run inside one immediate transaction,
/// and each insert ignores name conflicts, so concurrent first runs cannot
/// duplicate the defaults. All four rows share a single creation timestamp.
fn seed_default_categories(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let count: i64 = tx.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    if count == 0 {
        let now = Utc::now().timestamp_millis();
        for (name, color) in DEFAULT_CATEGORIES {
            tx.execute(INSERT_DEFAULT_CATEGORY, params![ident::generate(), name, color, now])?;
        }
        msg_debug!(Message::DefaultCategoriesSeeded(DEFAULT_CATEGORIES.len()));
    }

    tx.commit()?;
    Ok(())
}
