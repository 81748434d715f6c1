#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251113172733,
        name: "material_ids_to_guid",
        up,
        down,
    }
}

// Materials and every referencing table switch from rowid-style INTEGER
// keys to TEXT GUIDs. A temporary mapping table carries each old id to a
// freshly generated GUID so references stay consistent across the rebuild.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE material_id_map (
          old_id INTEGER PRIMARY KEY,
          new_id TEXT NOT NULL
        );
        INSERT INTO material_id_map (old_id, new_id)
        SELECT material_id, lower(hex(randomblob(16))) FROM materials;

        CREATE TABLE materials_new (
          material_id TEXT PRIMARY KEY,
          material_code TEXT NOT NULL,
          material_name TEXT NOT NULL,
          category TEXT,
          unit_of_measure TEXT NOT NULL,
          unit_cost NUMERIC,
          quantity_on_hand NUMERIC NOT NULL DEFAULT 0,
          reorder_level NUMERIC,
          supplier_name TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        INSERT INTO materials_new
        SELECT m.new_id, t.material_code, t.material_name, t.category,
               t.unit_of_measure, t.unit_cost, t.quantity_on_hand,
               t.reorder_level, t.supplier_name, t.is_active,
               t.created_at_ms, t.updated_at_ms
        FROM materials t
        JOIN material_id_map m ON m.old_id = t.material_id;

        CREATE TABLE box_materials_new (
          box_material_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          material_id TEXT NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          planned_quantity NUMERIC NOT NULL DEFAULT 0,
          consumed_quantity NUMERIC NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO box_materials_new
        SELECT t.box_material_id, t.box_id, m.new_id, t.planned_quantity,
               t.consumed_quantity, t.created_at_ms
        FROM box_materials t
        JOIN material_id_map m ON m.old_id = t.material_id;

        CREATE TABLE activity_materials_new (
          activity_material_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_activity_id TEXT NOT NULL
            REFERENCES box_activities(box_activity_id) ON DELETE CASCADE,
          material_id TEXT NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          planned_quantity NUMERIC NOT NULL DEFAULT 0,
          consumed_quantity NUMERIC NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO activity_materials_new
        SELECT t.activity_material_id, t.box_activity_id, m.new_id,
               t.planned_quantity, t.consumed_quantity, t.created_at_ms
        FROM activity_materials t
        JOIN material_id_map m ON m.old_id = t.material_id;

        CREATE TABLE material_transactions_new (
          transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
          material_id TEXT NOT NULL
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
        INSERT INTO material_transactions_new
        SELECT t.transaction_id, m.new_id, t.box_id, t.box_activity_id,
               t.transaction_type, t.quantity, t.unit_cost,
               t.reference_number, t.remarks, t.performed_by,
               t.transaction_at_ms
        FROM material_transactions t
        JOIN material_id_map m ON m.old_id = t.material_id;

        DROP TABLE material_transactions;
        DROP TABLE activity_materials;
        DROP TABLE box_materials;
        DROP TABLE materials;
        ALTER TABLE materials_new RENAME TO materials;
        ALTER TABLE box_materials_new RENAME TO box_materials;
        ALTER TABLE activity_materials_new RENAME TO activity_materials;
        ALTER TABLE material_transactions_new RENAME TO material_transactions;

        CREATE UNIQUE INDEX ux_materials_code ON materials(material_code);
        CREATE INDEX ix_box_materials_box ON box_materials(box_id);
        CREATE INDEX ix_activity_materials_activity
          ON activity_materials(box_activity_id);
        CREATE INDEX ix_material_transactions_material
          ON material_transactions(material_id);

        DROP TABLE material_id_map;
"#,
    )?;
    Ok(())
}

// The generated GUIDs have no way back to the discarded integer ids.
fn down(_tx: &Transaction<'_>) -> Result<(), SchemaError> {
    Err(SchemaError::Irreversible {
        version: 20251113172733,
        name: "material_ids_to_guid",
    })
}
