#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251214122143,
        name: "checklist_reference_tables",
        up,
        down,
    }
}

// Free-text category and reference-document strings on predefined items
// become proper master tables. The item table is recreated around the new
// FKs; the library itself is seeded by the next step.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE checklist_categories (
          category_id TEXT PRIMARY KEY,
          category_name TEXT NOT NULL,
          category_code TEXT NOT NULL,
          display_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_checklist_categories_code
          ON checklist_categories(category_code);

        CREATE TABLE checklist_references (
          reference_id TEXT PRIMARY KEY,
          reference_code TEXT NOT NULL,
          title TEXT NOT NULL,
          document_url TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_checklist_references_code
          ON checklist_references(reference_code);

        DROP TABLE predefined_checklist_items;
        CREATE TABLE predefined_checklist_items (
          predefined_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          category_id TEXT NOT NULL
            REFERENCES checklist_categories(category_id) ON DELETE RESTRICT,
          reference_id TEXT
            REFERENCES checklist_references(reference_id) ON DELETE SET NULL,
          item_number TEXT NOT NULL,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1
        );
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE predefined_checklist_items;
        CREATE TABLE predefined_checklist_items (
          predefined_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          category TEXT NOT NULL,
          reference_document TEXT,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        DROP TABLE checklist_references;
        DROP TABLE checklist_categories;
"#,
    )?;
    Ok(())
}
