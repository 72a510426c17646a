//! Database layer for the tasklite application.
//!
//! A typed persistence layer over a single on-device SQLite file. The
//! schema is evolved through versioned migrations, the four default
//! categories are seeded on first run, and each entity module exposes CRUD
//! operations that map raw rows into the domain types of [`crate::libs`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklite::db::{db::Db, tasks::Tasks};
//! use tasklite::libs::task::NewTask;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = tasks.create(&NewTask::new("Review PR #123"))?;
//! println!("created {}", task.id);
//! # Ok(())
//! # }
//! ```

/// Connection management, initialization and default-category seeding.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Row-to-domain-entity mapping, including timestamp normalization.
pub mod mapper;

/// Category CRUD operations with live task counts.
pub mod categories;

/// Task CRUD operations, filtered listing and aggregate statistics.
pub mod tasks;
