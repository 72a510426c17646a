//! Core library modules for the tasklite application.
//!
//! Domain types, configuration, identifier generation, messaging and console
//! rendering live here; everything that touches SQLite lives under
//! [`crate::db`].

pub mod category;
pub mod config;
pub mod data_storage;
pub mod ident;
pub mod messages;
pub mod task;
pub mod view;
