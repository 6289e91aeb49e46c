//! Checklist persistence: one checklist per plan, items stored in order.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::plan_queries::{parse_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{ChecklistItem, HikeChecklist},
};

const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM hike_plans WHERE id = ?1)";
const UPSERT_CHECKLIST_SQL: &str = "INSERT INTO checklists (plan_id, last_updated) VALUES (?1, ?2) ON CONFLICT(plan_id) DO UPDATE SET last_updated = excluded.last_updated";
const DELETE_ITEMS_SQL: &str = "DELETE FROM checklist_items WHERE plan_id = ?1";
const INSERT_ITEM_SQL: &str = "INSERT INTO checklist_items (plan_id, item_id, position, name, description, category, status, is_critical, checked) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_CHECKLIST_SQL: &str = "SELECT last_updated FROM checklists WHERE plan_id = ?1";
const SELECT_ITEMS_SQL: &str = "SELECT item_id, name, description, category, status, is_critical, checked FROM checklist_items WHERE plan_id = ?1 ORDER BY position";
const DELETE_CHECKLIST_SQL: &str = "DELETE FROM checklists WHERE plan_id = ?1";

fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<ChecklistItem> {
    Ok(ChecklistItem {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category: parse_column(row, 3)?,
        status: parse_column(row, 4)?,
        is_critical: row.get(5)?,
        checked: row.get(6)?,
    })
}

/// Replaces the stored checklist for `checklist.plan_id` with the given one.
///
/// Runs against a plain connection so callers can pass an open transaction.
pub(super) fn write_checklist(conn: &Connection, checklist: &HikeChecklist) -> Result<()> {
    let plan_id = checklist.plan_id as i64;

    conn.execute(
        UPSERT_CHECKLIST_SQL,
        params![plan_id, checklist.last_updated.to_string()],
    )
    .db_context("Failed to store checklist")?;

    conn.execute(DELETE_ITEMS_SQL, params![plan_id])
        .db_context("Failed to clear checklist items")?;

    let mut stmt = conn
        .prepare(INSERT_ITEM_SQL)
        .db_context("Failed to prepare item insert")?;

    for (position, item) in checklist.items.iter().enumerate() {
        stmt.execute(params![
            plan_id,
            item.id,
            position as i64,
            item.name,
            item.description,
            item.category.as_str(),
            item.status.as_str(),
            item.is_critical,
            item.checked,
        ])
        .db_context("Failed to insert checklist item")?;
    }

    Ok(())
}

fn load_checklist(conn: &Connection, plan_id: u64) -> Result<Option<HikeChecklist>> {
    let last_updated = conn
        .query_row(SELECT_CHECKLIST_SQL, params![plan_id as i64], |row| {
            timestamp_column(row, 0)
        })
        .optional()
        .db_context("Failed to query checklist")?;

    let Some(last_updated) = last_updated else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare(SELECT_ITEMS_SQL)
        .db_context("Failed to prepare query")?;
    let items = stmt
        .query_map(params![plan_id as i64], build_item_from_row)
        .db_context("Failed to query checklist items")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read checklist item row")?;

    Ok(Some(HikeChecklist {
        plan_id,
        items,
        last_updated,
    }))
}

impl super::Database {
    /// Retrieves the checklist for a plan, if one has been stored.
    pub fn get_checklist(&self, plan_id: u64) -> Result<Option<HikeChecklist>> {
        load_checklist(&self.connection, plan_id)
    }

    /// Stores a checklist, replacing any existing checklist for the same plan.
    pub fn save_checklist(&mut self, checklist: &HikeChecklist) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan_exists: bool = tx
            .query_row(
                CHECK_PLAN_EXISTS_SQL,
                params![checklist.plan_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check hike plan existence")?;
        if !plan_exists {
            return Err(PlannerError::PlanNotFound {
                id: checklist.plan_id,
            });
        }

        write_checklist(&tx, checklist)?;
        tx.commit().db_context("Failed to commit transaction")
    }

    /// Removes a plan's checklist. Returns whether a checklist existed.
    pub fn delete_checklist(&mut self, plan_id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ITEMS_SQL, params![plan_id as i64])
            .db_context("Failed to delete checklist items")?;
        let deleted = tx
            .execute(DELETE_CHECKLIST_SQL, params![plan_id as i64])
            .db_context("Failed to delete checklist")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }

    /// Read-modify-write of a plan's checklist inside one transaction.
    ///
    /// `update` edits the loaded checklist; on success `last_updated` is
    /// refreshed and the result is stored and returned. An error from
    /// `update` rolls the transaction back.
    pub fn modify_checklist<F>(&mut self, plan_id: u64, update: F) -> Result<HikeChecklist>
    where
        F: FnOnce(&mut HikeChecklist) -> Result<()>,
    {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut checklist =
            load_checklist(&tx, plan_id)?.ok_or(PlannerError::ChecklistNotFound { plan_id })?;

        update(&mut checklist)?;
        checklist.last_updated = Timestamp::now();

        write_checklist(&tx, &checklist)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(checklist)
    }
}
