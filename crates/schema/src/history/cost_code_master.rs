#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260114174124,
        name: "cost_code_master",
        up,
        down,
    }
}

// cost_codes is a company-wide master, not project data; the rename makes
// that explicit and project_cost_items' FK clause follows automatically.
// Projects also gain their manager while we are touching the area.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE cost_codes RENAME TO cost_codes_master;

        ALTER TABLE projects ADD COLUMN project_manager_id TEXT
          REFERENCES users(user_id) ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE projects_old (
          project_id TEXT PRIMARY KEY,
          project_code TEXT NOT NULL,
          project_name TEXT NOT NULL,
          client_name TEXT,
          location TEXT,
          start_date_ms INTEGER,
          planned_end_date_ms INTEGER,
          actual_end_date_ms INTEGER,
          status TEXT NOT NULL DEFAULT 'Active',
          total_boxes INTEGER NOT NULL DEFAULT 0,
          description TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        INSERT INTO projects_old
        SELECT project_id, project_code, project_name, client_name, location,
               start_date_ms, planned_end_date_ms, actual_end_date_ms, status,
               total_boxes, description, created_at_ms, updated_at_ms
        FROM projects;
        DROP TABLE projects;
        ALTER TABLE projects_old RENAME TO projects;
        CREATE UNIQUE INDEX ux_projects_code ON projects(project_code);

        ALTER TABLE cost_codes_master RENAME TO cost_codes;
"#,
    )?;
    Ok(())
}
