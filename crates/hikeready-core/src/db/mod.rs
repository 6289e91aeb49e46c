//! Database operations and SQLite management for hike plans and checklists.
//!
//! This module is the persistence collaborator of the planning workflow. It
//! stores plans, one checklist per plan, and the active-hike pointer, and
//! never calls the generator or scorer itself.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod checklist_queries;
pub mod migrations;
pub mod plan_queries;
pub mod state_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
