//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before weather was recorded lack the column
        let has_weather_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('hike_plans') WHERE name = 'weather'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect hike_plans columns")?;

        if !has_weather_column {
            log::info!("Adding weather column to hike_plans");
            self.connection
                .execute("ALTER TABLE hike_plans ADD COLUMN weather TEXT", [])
                .db_context("Failed to add weather column to hike_plans table")?;
        }

        Ok(())
    }
}
