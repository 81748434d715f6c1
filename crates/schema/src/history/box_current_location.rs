#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251202104635,
        name: "box_current_location",
        up,
        down,
    }
}

// Boxes learn where they currently sit, and the movement log records who
// moved them. History rows predating this step keep a NULL mover.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE boxes ADD COLUMN current_location_id TEXT
          REFERENCES factory_locations(location_id) ON DELETE SET NULL;

        CREATE TABLE box_location_history_new (
          location_history_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          location_id TEXT NOT NULL
            REFERENCES factory_locations(location_id) ON DELETE RESTRICT,
          moved_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          moved_at_ms INTEGER NOT NULL,
          remarks TEXT
        );
        INSERT INTO box_location_history_new
          (location_history_id, box_id, location_id, moved_at_ms, remarks)
        SELECT location_history_id, box_id, location_id, moved_at_ms, remarks
        FROM box_location_history;
        DROP TABLE box_location_history;
        ALTER TABLE box_location_history_new RENAME TO box_location_history;
        CREATE INDEX ix_box_location_history_box ON box_location_history(box_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE box_location_history_old (
          location_history_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          location_id TEXT NOT NULL
            REFERENCES factory_locations(location_id) ON DELETE RESTRICT,
          moved_at_ms INTEGER NOT NULL,
          remarks TEXT
        );
        INSERT INTO box_location_history_old
          (location_history_id, box_id, location_id, moved_at_ms, remarks)
        SELECT location_history_id, box_id, location_id, moved_at_ms, remarks
        FROM box_location_history;
        DROP TABLE box_location_history;
        ALTER TABLE box_location_history_old RENAME TO box_location_history;
        CREATE INDEX ix_box_location_history_box ON box_location_history(box_id);

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
          updated_at_ms INTEGER
        );
        INSERT INTO boxes_old
        SELECT box_id, project_id, box_tag, box_name, box_type, serial_number,
               floor_number, zone, length_mm, width_mm, height_mm, weight_kg,
               bim_model_reference, revit_element_id, qr_code, current_stage,
               status, progress_percent, planned_start_ms, planned_finish_ms,
               actual_start_ms, actual_finish_ms, created_at_ms, updated_at_ms
        FROM boxes;
        DROP TABLE boxes;
        ALTER TABLE boxes_old RENAME TO boxes;
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);
"#,
    )?;
    Ok(())
}
