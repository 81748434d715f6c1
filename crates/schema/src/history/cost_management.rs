#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113161331,
        name: "cost_management",
        up,
        down,
    }
}

// First slice of the cost module: a rate-carrying cost code library and
// per-project cost line items priced against it.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE cost_codes (
          cost_code_id TEXT PRIMARY KEY,
          code TEXT NOT NULL,
          description TEXT,
          category TEXT,
          sub_category TEXT,
          unit_of_measure TEXT,
          unit_rate NUMERIC,
          currency TEXT NOT NULL DEFAULT 'AED',
          display_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        CREATE UNIQUE INDEX ux_cost_codes_code ON cost_codes(code);

        CREATE TABLE project_cost_items (
          cost_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          cost_code_id TEXT NOT NULL
            REFERENCES cost_codes(cost_code_id) ON DELETE RESTRICT,
          box_id TEXT REFERENCES boxes(box_id) ON DELETE SET NULL,
          description TEXT,
          quantity NUMERIC NOT NULL DEFAULT 0,
          unit_rate NUMERIC,
          total_amount NUMERIC,
          status TEXT NOT NULL DEFAULT 'Draft',
          created_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE project_cost_items;
        DROP TABLE cost_codes;
"#,
    )?;
    Ok(())
}
