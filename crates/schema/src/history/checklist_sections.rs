#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251215081245,
        name: "checklist_sections",
        up,
        down,
    }
}

// Checklists become first-class documents with ordered sections, and
// predefined items hang off a section instead of a bare category. The
// category and reference masters stay for reporting; the item-level FKs
// to them are dropped in the rebuild.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE checklists (
          checklist_id TEXT PRIMARY KEY,
          name TEXT NOT NULL,
          code TEXT NOT NULL,
          discipline TEXT,
          sub_discipline TEXT,
          page_number INTEGER,
          reference_documents_json TEXT,
          signature_roles_json TEXT,
          wir_code TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_checklists_code ON checklists(code);

        CREATE TABLE checklist_sections (
          section_id TEXT PRIMARY KEY,
          checklist_id TEXT NOT NULL
            REFERENCES checklists(checklist_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          section_order INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE predefined_checklist_items_new (
          predefined_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          section_id TEXT
            REFERENCES checklist_sections(section_id) ON DELETE SET NULL,
          item_number TEXT NOT NULL,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO predefined_checklist_items_new
          (predefined_item_id, item_number, item_text, item_order, is_active)
        SELECT predefined_item_id, item_number, item_text, item_order, is_active
        FROM predefined_checklist_items;
        DROP TABLE predefined_checklist_items;
        ALTER TABLE predefined_checklist_items_new
          RENAME TO predefined_checklist_items;
"#,
    )?;
    Ok(())
}

// Category assignments cannot be reconstructed, so the rebuilt items fall
// back to the Handover category.
fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE predefined_checklist_items_old (
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
        INSERT INTO predefined_checklist_items_old
          (predefined_item_id, category_id, reference_id, item_number,
           item_text, item_order, is_active)
        SELECT predefined_item_id, 'cat-handover', NULL, item_number,
               item_text, item_order, is_active
        FROM predefined_checklist_items;
        DROP TABLE predefined_checklist_items;
        ALTER TABLE predefined_checklist_items_old
          RENAME TO predefined_checklist_items;

        DROP TABLE checklist_sections;
        DROP TABLE checklists;
"#,
    )?;
    Ok(())
}
