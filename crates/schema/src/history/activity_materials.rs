#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251113083125,
        name: "activity_materials",
        up,
        down,
    }
}

// Material demand moves from a free-text note on the activity to proper
// per-activity rows, and issue transactions can point at the activity
// they were drawn for.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE activity_materials (
          activity_material_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_activity_id TEXT NOT NULL
            REFERENCES box_activities(box_activity_id) ON DELETE CASCADE,
          material_id INTEGER NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          planned_quantity NUMERIC NOT NULL DEFAULT 0,
          consumed_quantity NUMERIC NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
        CREATE INDEX ix_activity_materials_activity
          ON activity_materials(box_activity_id);

        ALTER TABLE material_transactions ADD COLUMN box_activity_id TEXT
          REFERENCES box_activities(box_activity_id) ON DELETE SET NULL;

        ALTER TABLE box_activities DROP COLUMN materials_needed;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE box_activities ADD COLUMN materials_needed TEXT;

        CREATE TABLE material_transactions_old (
          transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
          material_id INTEGER NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          box_id TEXT REFERENCES boxes(box_id) ON DELETE SET NULL,
          transaction_type TEXT NOT NULL,
          quantity NUMERIC NOT NULL,
          reference_number TEXT,
          remarks TEXT,
          performed_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          transaction_at_ms INTEGER NOT NULL
        );
        INSERT INTO material_transactions_old
          (transaction_id, material_id, box_id, transaction_type, quantity,
           reference_number, remarks, performed_by, transaction_at_ms)
        SELECT transaction_id, material_id, box_id, transaction_type, quantity,
               reference_number, remarks, performed_by, transaction_at_ms
        FROM material_transactions;
        DROP TABLE material_transactions;
        ALTER TABLE material_transactions_old RENAME TO material_transactions;
        CREATE INDEX ix_material_transactions_material
          ON material_transactions(material_id);

        DROP TABLE activity_materials;
"#,
    )?;
    Ok(())
}
