#![forbid(unsafe_code)]

//! Initial schema: the full production, people, materials, quality and
//! tracking table set plus the standard activity library and org seed.

mod indexes;
mod materials;
mod people;
mod production;
mod quality;
mod seed;
mod tracking;

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251109080411,
        name: "baseline",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(people::SQL)?;
    tx.execute_batch(production::SQL)?;
    tx.execute_batch(materials::SQL)?;
    tx.execute_batch(quality::SQL)?;
    tx.execute_batch(tracking::SQL)?;
    tx.execute_batch(indexes::SQL)?;
    tx.execute_batch(seed::SQL)?;
    Ok(())
}

// Children before parents so the drops survive foreign_keys = ON.
fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE audit_log;
        DROP TABLE risks;
        DROP TABLE box_costs;
        DROP TABLE cost_categories;
        DROP TABLE box_location_history;
        DROP TABLE factory_locations;
        DROP TABLE notifications;
        DROP TABLE quality_issues;
        DROP TABLE wir_records;
        DROP TABLE wir_checklist_items;
        DROP TABLE wir_checkpoints;
        DROP TABLE material_transactions;
        DROP TABLE box_materials;
        DROP TABLE materials;
        DROP TABLE box_assets;
        DROP TABLE daily_production_log;
        DROP TABLE progress_updates;
        DROP TABLE activity_dependencies;
        DROP TABLE box_activities;
        DROP TABLE boxes;
        DROP TABLE projects;
        DROP TABLE team_members;
        DROP TABLE teams;
        DROP TABLE group_roles;
        DROP TABLE user_groups;
        DROP TABLE user_roles;
        DROP TABLE groups;
        DROP TABLE roles;
        DROP TABLE users;
        DROP TABLE departments;
        DROP TABLE activity_master;
"#,
    )?;
    Ok(())
}
