#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260120153413,
        name: "box_panels",
        up,
        down,
    }
}

// Walls arrive as discrete panels now; each box tracks its panel
// inventory. Extended panel lifecycle lands in panel_management.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE box_panels (
          box_panel_id TEXT PRIMARY KEY,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          panel_code TEXT NOT NULL,
          panel_name TEXT,
          position TEXT,
          status TEXT NOT NULL DEFAULT 'Planned',
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        CREATE UNIQUE INDEX ux_box_panels_code ON box_panels(box_id, panel_code);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch("DROP TABLE box_panels;")?;
    Ok(())
}
