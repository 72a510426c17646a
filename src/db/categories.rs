//! Category CRUD operations.
//!
//! Every read annotates categories with their live task count via a left
//! join over tasks. Name uniqueness is enforced by the schema: creating a
//! duplicate surfaces the engine's constraint violation unchanged. Deleting
//! a category never touches its tasks; the `ON DELETE SET NULL` action
//! clears their references.

use crate::db::db::Db;
use crate::db::mapper;
use crate::libs::category::{Category, CategoryUpdate, DEFAULT_COLOR};
use crate::libs::ident;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, ToSql};

const INSERT_CATEGORY: &str = "INSERT INTO categories (id, name, color, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const SELECT_CATEGORIES: &str = "
    SELECT c.id, c.name, c.color, c.created_at, c.updated_at, COUNT(t.id) AS task_count
    FROM categories c
    LEFT JOIN tasks t ON t.category_id = c.id
";
const GROUP_BY_CATEGORY: &str = "GROUP BY c.id";
const ORDER_BY_NAME: &str = "ORDER BY c.name ASC";

pub struct Categories {
    db: Db,
}

impl Categories {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    /// Builds a manager around an already opened database. Used by callers
    /// that control the database location, such as tests.
    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Creates a category and returns the stored row.
    ///
    /// A duplicate name fails with the engine's uniqueness violation.
    pub fn create(&mut self, name: &str, color: Option<&str>) -> Result<Category> {
        let id = ident::generate();
        let now = mapper::to_epoch_ms(Utc::now());

        self.db.conn.execute(INSERT_CATEGORY, params![id, name, color.unwrap_or(DEFAULT_COLOR), now])?;

        self.get_by_id(&id)?.ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(id)))
    }

    /// All categories with task counts, ordered by name ascending.
    pub fn get_all(&mut self) -> Result<Vec<Category>> {
        let sql = format!("{} {} {}", SELECT_CATEGORIES, GROUP_BY_CATEGORY, ORDER_BY_NAME);
        let mut stmt = self.db.conn.prepare(&sql)?;
        let category_iter = stmt.query_map([], |row| mapper::map_category_row(row))?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    /// One category with its task count, or `None` when absent.
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Category>> {
        let sql = format!("{} WHERE c.id = ?1 {}", SELECT_CATEGORIES, GROUP_BY_CATEGORY);
        self.db
            .conn
            .query_row(&sql, params![id], |row| mapper::map_category_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// Looks a category up by its unique name.
    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        let sql = format!("{} WHERE c.name = ?1 {}", SELECT_CATEGORIES, GROUP_BY_CATEGORY);
        self.db
            .conn
            .query_row(&sql, params![name], |row| mapper::map_category_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// Applies a partial update and returns the stored row.
    ///
    /// Only supplied fields change; `updated_at` refreshes either way, so an
    /// empty update is a pure touch.
    pub fn update(&mut self, id: &str, update: &CategoryUpdate) -> Result<Category> {
        let mut sets: Vec<String> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &update.name {
            values.push(Box::new(name.clone()));
            sets.push(format!("name = ?{}", values.len()));
        }
        if let Some(color) = &update.color {
            values.push(Box::new(color.clone()));
            sets.push(format!("color = ?{}", values.len()));
        }

        values.push(Box::new(mapper::to_epoch_ms(Utc::now())));
        sets.push(format!("updated_at = ?{}", values.len()));

        values.push(Box::new(id.to_string()));
        let sql = format!("UPDATE categories SET {} WHERE id = ?{}", sets.join(", "), values.len());

        let value_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let affected = self.db.conn.execute(&sql, &value_refs[..])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CategoryNotFound(id.to_string())));
        }

        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(id.to_string())))
    }

    /// Deletes a category unconditionally. Referencing tasks survive with
    /// their category reference cleared by the foreign-key action.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.db.conn.execute(DELETE_CATEGORY, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CategoryNotFound(id.to_string())));
        }
        Ok(())
    }
}
