#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260120184159,
        name: "panel_management",
        up,
        down,
    }
}

// Full panel lifecycle: typed panels, barcode scans at each handling
// point, delivery notes batching panels from factory to site, and
// approval plus production/delivery/installation dates on the panel row.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE panel_types (
          panel_type_id TEXT PRIMARY KEY,
          type_name TEXT NOT NULL,
          type_code TEXT,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE panel_delivery_notes (
          delivery_note_id TEXT PRIMARY KEY,
          note_number TEXT NOT NULL,
          factory_id TEXT
            REFERENCES factories(factory_id) ON DELETE SET NULL,
          project_id TEXT
            REFERENCES projects(project_id) ON DELETE SET NULL,
          status TEXT NOT NULL DEFAULT 'Draft',
          dispatched_at_ms INTEGER,
          received_at_ms INTEGER,
          created_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_panel_delivery_notes_number
          ON panel_delivery_notes(note_number);

        CREATE TABLE panel_scan_logs (
          scan_log_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_panel_id TEXT NOT NULL
            REFERENCES box_panels(box_panel_id) ON DELETE CASCADE,
          scanned_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          scan_type TEXT NOT NULL,
          location TEXT,
          scanned_at_ms INTEGER NOT NULL
        );
        CREATE INDEX ix_panel_scan_logs_panel ON panel_scan_logs(box_panel_id);

        ALTER TABLE box_panels ADD COLUMN panel_type_id TEXT
          REFERENCES panel_types(panel_type_id) ON DELETE SET NULL;
        ALTER TABLE box_panels ADD COLUMN barcode TEXT;
        ALTER TABLE box_panels
          ADD COLUMN approval_status TEXT NOT NULL DEFAULT 'Pending';
        ALTER TABLE box_panels ADD COLUMN approved_by TEXT
          REFERENCES users(user_id) ON DELETE SET NULL;
        ALTER TABLE box_panels ADD COLUMN approved_at_ms INTEGER;
        ALTER TABLE box_panels ADD COLUMN delivery_note_id TEXT
          REFERENCES panel_delivery_notes(delivery_note_id) ON DELETE SET NULL;
        ALTER TABLE box_panels ADD COLUMN produced_at_ms INTEGER;
        ALTER TABLE box_panels ADD COLUMN delivered_at_ms INTEGER;
        ALTER TABLE box_panels ADD COLUMN installed_at_ms INTEGER;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE box_panels_old (
          box_panel_id TEXT PRIMARY KEY,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          panel_code TEXT NOT NULL,
          panel_name TEXT,
          position TEXT,
          status TEXT NOT NULL DEFAULT 'Planned',
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        INSERT INTO box_panels_old
          (box_panel_id, box_id, panel_code, panel_name, position, status,
           created_at_ms, updated_at_ms)
        SELECT box_panel_id, box_id, panel_code, panel_name, position, status,
               created_at_ms, updated_at_ms
        FROM box_panels;
        DROP TABLE box_panels;
        ALTER TABLE box_panels_old RENAME TO box_panels;
        CREATE UNIQUE INDEX ux_box_panels_code ON box_panels(box_id, panel_code);

        DROP TABLE panel_scan_logs;
        DROP TABLE panel_delivery_notes;
        DROP TABLE panel_types;
"#,
    )?;
    Ok(())
}
