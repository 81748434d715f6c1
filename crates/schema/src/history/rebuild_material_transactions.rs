#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251113100448,
        name: "rebuild_material_transactions",
        up,
        down,
    }
}

// Straight drop-and-recreate. The ledger got its full FK set (and a unit
// cost snapshot) before any production data existed, so no rows are copied.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE material_transactions;
        CREATE TABLE material_transactions (
          transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
          material_id INTEGER NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          box_id TEXT REFERENCES boxes(box_id) ON DELETE SET NULL,
          box_activity_id TEXT
            REFERENCES box_activities(box_activity_id) ON DELETE SET NULL,
          transaction_type TEXT NOT NULL,
          quantity NUMERIC NOT NULL,
          unit_cost NUMERIC,
          reference_number TEXT,
          remarks TEXT,
          performed_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          transaction_at_ms INTEGER NOT NULL
        );
        CREATE INDEX ix_material_transactions_material
          ON material_transactions(material_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE material_transactions;
        CREATE TABLE material_transactions (
          transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
          material_id INTEGER NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          box_id TEXT REFERENCES boxes(box_id) ON DELETE SET NULL,
          transaction_type TEXT NOT NULL,
          quantity NUMERIC NOT NULL,
          reference_number TEXT,
          remarks TEXT,
          performed_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          transaction_at_ms INTEGER NOT NULL,
          box_activity_id TEXT
            REFERENCES box_activities(box_activity_id) ON DELETE SET NULL
        );
        CREATE INDEX ix_material_transactions_material
          ON material_transactions(material_id);
"#,
    )?;
    Ok(())
}
