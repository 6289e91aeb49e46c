//! Hike plan CRUD operations and queries.

use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::checklist_queries::write_checklist;
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{ChecklistItem, HikeChecklist, HikePlan, NewHikePlan, Weather},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO hike_plans (name, hike_type, terrain, elevation, duration, group_size, experience_level, weather, is_ready, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9)";
const PLAN_COLUMNS: &str = "id, name, hike_type, terrain, elevation, duration, group_size, experience_level, weather, is_ready, created_at";
const UPDATE_PLAN_READY_SQL: &str = "UPDATE hike_plans SET is_ready = 1 WHERE id = ?1";
const DELETE_PLAN_ITEMS_SQL: &str = "DELETE FROM checklist_items WHERE plan_id = ?1";
const DELETE_PLAN_CHECKLIST_SQL: &str = "DELETE FROM checklists WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM hike_plans WHERE id = ?1";
const CLEAR_ACTIVE_IF_PLAN_SQL: &str =
    "DELETE FROM app_state WHERE key = 'active_plan_id' AND value = ?1";
const UPSERT_ACTIVE_PLAN_SQL: &str = "INSERT INTO app_state (key, value) VALUES ('active_plan_id', ?1) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Parses a text column through `FromStr`, reporting bad values as a
/// conversion failure on that column.
pub(super) fn parse_column<T>(row: &Row, index: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(index)?;
    text.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, e.into()))
}

/// Parses an RFC 3339 timestamp column.
pub(super) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Helper function to construct a HikePlan from a database row
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<HikePlan> {
        // NULL weather comes from rows written before the column existed
        let weather = match row.get::<_, Option<String>>(8)? {
            Some(text) => text.parse::<Weather>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(8, Type::Text, e.into())
            })?,
            None => Weather::default(),
        };

        Ok(HikePlan {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            hike_type: parse_column(row, 2)?,
            terrain: parse_column(row, 3)?,
            elevation: parse_column(row, 4)?,
            duration: row.get::<_, i64>(5)? as u32,
            group_size: parse_column(row, 6)?,
            experience_level: parse_column(row, 7)?,
            weather,
            is_ready: row.get(9)?,
            created_at: timestamp_column(row, 10)?,
        })
    }

    /// Stores a new plan together with its checklist and makes it the active
    /// hike, all in one transaction.
    ///
    /// `items_for` receives the stored plan (with its assigned ID) and returns
    /// the checklist items to persist for it.
    pub fn create_plan<F>(
        &mut self,
        new_plan: &NewHikePlan,
        items_for: F,
    ) -> Result<(HikePlan, HikeChecklist)>
    where
        F: FnOnce(&HikePlan) -> Vec<ChecklistItem>,
    {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                new_plan.name,
                new_plan.hike_type.as_str(),
                new_plan.terrain.as_str(),
                new_plan.elevation.as_str(),
                i64::from(new_plan.duration),
                new_plan.group_size.as_str(),
                new_plan.experience_level.as_str(),
                new_plan.weather.as_str(),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert hike plan")?;

        let plan = HikePlan {
            id: tx.last_insert_rowid() as u64,
            name: new_plan.name.clone(),
            hike_type: new_plan.hike_type,
            terrain: new_plan.terrain,
            elevation: new_plan.elevation,
            duration: new_plan.duration,
            group_size: new_plan.group_size,
            experience_level: new_plan.experience_level,
            weather: new_plan.weather,
            created_at: now,
            is_ready: false,
        };

        let checklist = HikeChecklist {
            plan_id: plan.id,
            items: items_for(&plan),
            last_updated: now,
        };
        write_checklist(&tx, &checklist)?;

        tx.execute(UPSERT_ACTIVE_PLAN_SQL, params![plan.id.to_string()])
            .db_context("Failed to set active hike plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((plan, checklist))
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<HikePlan>> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM hike_plans WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query hike plan")
    }

    /// Lists all plans, newest first.
    pub fn list_plans(&self) -> Result<Vec<HikePlan>> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM hike_plans ORDER BY id DESC");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map([], Self::build_plan_from_row)
            .db_context("Failed to query hike plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read hike plan row")?;

        Ok(plans)
    }

    /// Sets the plan's ready flag. The flag is never cleared again.
    pub fn mark_plan_ready(&mut self, id: u64) -> Result<HikePlan> {
        let changed = self
            .connection
            .execute(UPDATE_PLAN_READY_SQL, params![id as i64])
            .db_context("Failed to mark hike plan ready")?;

        if changed == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })
    }

    /// Permanently deletes a plan, its checklist, and the active-hike pointer
    /// if it referred to this plan.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PLAN_ITEMS_SQL, params![id as i64])
            .db_context("Failed to delete checklist items")?;
        tx.execute(DELETE_PLAN_CHECKLIST_SQL, params![id as i64])
            .db_context("Failed to delete checklist")?;
        tx.execute(CLEAR_ACTIVE_IF_PLAN_SQL, params![id.to_string()])
            .db_context("Failed to clear active hike plan")?;

        let deleted = tx
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete hike plan")?;

        if deleted == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
