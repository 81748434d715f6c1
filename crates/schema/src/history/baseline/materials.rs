#![forbid(unsafe_code)]

// Materials start with INTEGER keys; the material_ids_to_guid migration
// later rebuilds this family of tables around TEXT GUID keys.
pub(super) const SQL: &str = r#"

        CREATE TABLE materials (
          material_id INTEGER PRIMARY KEY AUTOINCREMENT,
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

        CREATE TABLE box_materials (
          box_material_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          material_id INTEGER NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          planned_quantity NUMERIC NOT NULL DEFAULT 0,
          consumed_quantity NUMERIC NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

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
          transaction_at_ms INTEGER NOT NULL
        );
"#;
