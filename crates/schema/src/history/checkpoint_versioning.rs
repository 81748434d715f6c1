#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260119000000,
        name: "checkpoint_versioning",
        up,
        down,
    }
}

// Checkpoint definitions are revised between projects; a superseded
// definition keeps its rows and points at its replacement's parent.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE wir_checkpoints
          ADD COLUMN version INTEGER NOT NULL DEFAULT 1;
        ALTER TABLE wir_checkpoints ADD COLUMN parent_wir_id INTEGER
          REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE wir_checkpoints_old (
          wir_checkpoint_id INTEGER PRIMARY KEY AUTOINCREMENT,
          activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE CASCADE,
          checkpoint_code TEXT NOT NULL,
          checkpoint_name TEXT NOT NULL,
          stage INTEGER NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO wir_checkpoints_old
          (wir_checkpoint_id, activity_id, checkpoint_code, checkpoint_name,
           stage, description, is_active)
        SELECT wir_checkpoint_id, activity_id, checkpoint_code,
               checkpoint_name, stage, description, is_active
        FROM wir_checkpoints;
        DROP TABLE wir_checkpoints;
        ALTER TABLE wir_checkpoints_old RENAME TO wir_checkpoints;
"#,
    )?;
    Ok(())
}
