//! # Tasklite - Local Task Management
//!
//! A command-line utility for managing tasks and categories on a single
//! device, backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, filter and delete tasks
//! - **Categories**: Color-coded categories with live task counts
//! - **Statistics**: Completion rate plus status and priority breakdowns
//! - **Local Storage**: Single SQLite file with versioned migrations
//! - **Seeded Defaults**: Four starter categories created on first run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklite::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
