//! Application state: the active hike pointer.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, PlannerError, Result};

const ACTIVE_PLAN_KEY: &str = "active_plan_id";
const SELECT_STATE_SQL: &str = "SELECT value FROM app_state WHERE key = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO app_state (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_STATE_SQL: &str = "DELETE FROM app_state WHERE key = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM hike_plans WHERE id = ?1)";

impl super::Database {
    /// Returns the ID of the active hike, if any.
    pub fn active_plan_id(&self) -> Result<Option<u64>> {
        let value: Option<String> = self
            .connection
            .query_row(SELECT_STATE_SQL, params![ACTIVE_PLAN_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to query active hike plan")?;

        // A malformed value is treated as no active hike
        Ok(value.and_then(|v| v.parse().ok()))
    }

    /// Makes an existing plan the active hike.
    pub fn set_active_plan_id(&mut self, plan_id: u64) -> Result<()> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check hike plan existence")?;
        if !exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        self.connection
            .execute(
                UPSERT_STATE_SQL,
                params![ACTIVE_PLAN_KEY, plan_id.to_string()],
            )
            .db_context("Failed to set active hike plan")?;
        Ok(())
    }

    /// Clears the active hike. Returns whether one was set.
    pub fn clear_active_plan_id(&mut self) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_STATE_SQL, params![ACTIVE_PLAN_KEY])
            .db_context("Failed to clear active hike plan")?;
        Ok(deleted > 0)
    }
}
