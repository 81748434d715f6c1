#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251201083318,
        name: "predefined_checklist_items",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE predefined_checklist_items (
          predefined_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          category TEXT NOT NULL,
          reference_document TEXT,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1
        );

        ALTER TABLE wir_checklist_items ADD COLUMN predefined_item_id INTEGER
          REFERENCES predefined_checklist_items(predefined_item_id)
          ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE wir_checklist_items_old (
          checklist_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          wir_checkpoint_id INTEGER NOT NULL
            REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE CASCADE,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_mandatory INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO wir_checklist_items_old
          (checklist_item_id, wir_checkpoint_id, item_text, item_order,
           is_mandatory)
        SELECT checklist_item_id, wir_checkpoint_id, item_text, item_order,
               is_mandatory
        FROM wir_checklist_items;
        DROP TABLE wir_checklist_items;
        ALTER TABLE wir_checklist_items_old RENAME TO wir_checklist_items;

        DROP TABLE predefined_checklist_items;
"#,
    )?;
    Ok(())
}
