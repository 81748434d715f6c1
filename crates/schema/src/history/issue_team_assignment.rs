#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251219094646,
        name: "issue_team_assignment",
        up,
        down,
    }
}

// Rework is done by a trade team, not an individual, so assigned_to turns
// into a team FK. Old free-text assignees do not map and are cleared.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE quality_issues_new (
          quality_issue_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          wir_record_id INTEGER
            REFERENCES wir_records(wir_record_id) ON DELETE SET NULL,
          issue_type TEXT NOT NULL,
          severity TEXT NOT NULL DEFAULT 'Minor',
          description TEXT NOT NULL,
          status TEXT NOT NULL DEFAULT 'Open',
          raised_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          assigned_to TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          raised_at_ms INTEGER NOT NULL,
          resolved_at_ms INTEGER,
          resolution_notes TEXT
        );
        INSERT INTO quality_issues_new
          (quality_issue_id, box_id, wir_record_id, issue_type, severity,
           description, status, raised_by, assigned_to, raised_at_ms,
           resolved_at_ms, resolution_notes)
        SELECT quality_issue_id, box_id, wir_record_id, issue_type, severity,
               description, status, raised_by, NULL, raised_at_ms,
               resolved_at_ms, resolution_notes
        FROM quality_issues;
        DROP TABLE quality_issues;
        ALTER TABLE quality_issues_new RENAME TO quality_issues;
        CREATE INDEX ix_quality_issues_box ON quality_issues(box_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE quality_issues_old (
          quality_issue_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          wir_record_id INTEGER
            REFERENCES wir_records(wir_record_id) ON DELETE SET NULL,
          issue_type TEXT NOT NULL,
          severity TEXT NOT NULL DEFAULT 'Minor',
          description TEXT NOT NULL,
          status TEXT NOT NULL DEFAULT 'Open',
          raised_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          assigned_to TEXT,
          raised_at_ms INTEGER NOT NULL,
          resolved_at_ms INTEGER,
          resolution_notes TEXT
        );
        INSERT INTO quality_issues_old
          (quality_issue_id, box_id, wir_record_id, issue_type, severity,
           description, status, raised_by, assigned_to, raised_at_ms,
           resolved_at_ms, resolution_notes)
        SELECT quality_issue_id, box_id, wir_record_id, issue_type, severity,
               description, status, raised_by, assigned_to, raised_at_ms,
               resolved_at_ms, resolution_notes
        FROM quality_issues;
        DROP TABLE quality_issues;
        ALTER TABLE quality_issues_old RENAME TO quality_issues;
        CREATE INDEX ix_quality_issues_box ON quality_issues(box_id);
"#,
    )?;
    Ok(())
}
