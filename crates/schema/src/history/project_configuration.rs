#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251222083902,
        name: "project_configuration",
        up,
        down,
    }
}

// Every project gets its own buildings, levels, zones and box taxonomy.
// The global masters from project_categories_box_drawings stay in place
// until drop_legacy_box_types retires them.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE project_buildings (
          building_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          building_name TEXT NOT NULL,
          building_code TEXT,
          display_order INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE project_levels (
          level_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          level_name TEXT NOT NULL,
          level_number INTEGER,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE project_zones (
          zone_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          zone_name TEXT NOT NULL,
          zone_code TEXT,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE project_box_types (
          project_box_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          type_name TEXT NOT NULL,
          type_code TEXT,
          display_order INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE project_box_sub_types (
          project_box_sub_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_box_type_id INTEGER NOT NULL
            REFERENCES project_box_types(project_box_type_id) ON DELETE CASCADE,
          sub_type_name TEXT NOT NULL,
          sub_type_code TEXT,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE project_box_functions (
          box_function_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          function_name TEXT NOT NULL,
          function_code TEXT,
          created_at_ms INTEGER NOT NULL
        );
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE project_box_functions;
        DROP TABLE project_box_sub_types;
        DROP TABLE project_box_types;
        DROP TABLE project_zones;
        DROP TABLE project_levels;
        DROP TABLE project_buildings;
"#,
    )?;
    Ok(())
}
