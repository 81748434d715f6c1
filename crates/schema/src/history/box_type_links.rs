#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251218183405,
        name: "box_type_links",
        up,
        down,
    }
}

// The free-text box_type column becomes a pair of FKs into the type
// masters. Existing values are matched by type name; anything that does
// not match is left untyped.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE boxes_new (
          box_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          box_tag TEXT NOT NULL,
          box_name TEXT,
          box_type_id TEXT
            REFERENCES box_types(box_type_id) ON DELETE SET NULL,
          box_sub_type_id TEXT
            REFERENCES box_sub_types(box_sub_type_id) ON DELETE SET NULL,
          serial_number TEXT,
          floor_number INTEGER,
          zone TEXT,
          length_mm NUMERIC,
          width_mm NUMERIC,
          height_mm NUMERIC,
          weight_kg NUMERIC,
          bim_model_reference TEXT,
          revit_element_id TEXT,
          qr_code TEXT,
          current_stage INTEGER NOT NULL DEFAULT 1,
          status TEXT NOT NULL DEFAULT 'Planned',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER,
          current_location_id TEXT
            REFERENCES factory_locations(location_id) ON DELETE SET NULL
        );
        INSERT INTO boxes_new
        SELECT b.box_id, b.project_id, b.box_tag, b.box_name,
               (SELECT bt.box_type_id FROM box_types bt
                WHERE bt.type_name = b.box_type),
               NULL,
               b.serial_number, b.floor_number, b.zone, b.length_mm,
               b.width_mm, b.height_mm, b.weight_kg, b.bim_model_reference,
               b.revit_element_id, b.qr_code, b.current_stage, b.status,
               b.progress_percent, b.planned_start_ms, b.planned_finish_ms,
               b.actual_start_ms, b.actual_finish_ms, b.created_at_ms,
               b.updated_at_ms, b.current_location_id
        FROM boxes b;
        DROP TABLE boxes;
        ALTER TABLE boxes_new RENAME TO boxes;
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE boxes_old (
          box_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          box_tag TEXT NOT NULL,
          box_name TEXT,
          box_type TEXT,
          serial_number TEXT,
          floor_number INTEGER,
          zone TEXT,
          length_mm NUMERIC,
          width_mm NUMERIC,
          height_mm NUMERIC,
          weight_kg NUMERIC,
          bim_model_reference TEXT,
          revit_element_id TEXT,
          qr_code TEXT,
          current_stage INTEGER NOT NULL DEFAULT 1,
          status TEXT NOT NULL DEFAULT 'Planned',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER,
          current_location_id TEXT
            REFERENCES factory_locations(location_id) ON DELETE SET NULL
        );
        INSERT INTO boxes_old
        SELECT b.box_id, b.project_id, b.box_tag, b.box_name,
               (SELECT bt.type_name FROM box_types bt
                WHERE bt.box_type_id = b.box_type_id),
               b.serial_number, b.floor_number, b.zone, b.length_mm,
               b.width_mm, b.height_mm, b.weight_kg, b.bim_model_reference,
               b.revit_element_id, b.qr_code, b.current_stage, b.status,
               b.progress_percent, b.planned_start_ms, b.planned_finish_ms,
               b.actual_start_ms, b.actual_finish_ms, b.created_at_ms,
               b.updated_at_ms, b.current_location_id
        FROM boxes b;
        DROP TABLE boxes;
        ALTER TABLE boxes_old RENAME TO boxes;
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);
"#,
    )?;
    Ok(())
}
