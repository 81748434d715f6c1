#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260105164433,
        name: "issue_assignment_rework",
        up,
        down,
    }
}

// An issue can now be assigned three ways at once: the owning team, a
// directly responsible user, and a specific team member. Box activities
// additionally pick up a working-group assignment.
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
          assigned_to_team_id TEXT
            REFERENCES teams(team_id) ON DELETE SET NULL,
          assigned_to_user_id TEXT
            REFERENCES users(user_id) ON DELETE SET NULL,
          assigned_to_member_id TEXT
            REFERENCES team_members(team_member_id) ON DELETE SET NULL,
          raised_at_ms INTEGER NOT NULL,
          resolved_at_ms INTEGER,
          resolution_notes TEXT
        );
        INSERT INTO quality_issues_new
          (quality_issue_id, box_id, wir_record_id, issue_type, severity,
           description, status, raised_by, assigned_to_team_id,
           raised_at_ms, resolved_at_ms, resolution_notes)
        SELECT quality_issue_id, box_id, wir_record_id, issue_type, severity,
               description, status, raised_by, assigned_to,
               raised_at_ms, resolved_at_ms, resolution_notes
        FROM quality_issues;
        DROP TABLE quality_issues;
        ALTER TABLE quality_issues_new RENAME TO quality_issues;
        CREATE INDEX ix_quality_issues_box ON quality_issues(box_id);

        ALTER TABLE box_activities ADD COLUMN assigned_group_id TEXT
          REFERENCES team_groups(team_group_id) ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE box_activities_old (
          box_activity_id TEXT PRIMARY KEY,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE RESTRICT,
          status TEXT NOT NULL DEFAULT 'NotStarted',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          assigned_team_id TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          remarks TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        INSERT INTO box_activities_old
          (box_activity_id, box_id, activity_id, status, progress_percent,
           planned_start_ms, planned_finish_ms, actual_start_ms,
           actual_finish_ms, assigned_team_id, remarks, created_at_ms,
           updated_at_ms)
        SELECT box_activity_id, box_id, activity_id, status, progress_percent,
               planned_start_ms, planned_finish_ms, actual_start_ms,
               actual_finish_ms, assigned_team_id, remarks, created_at_ms,
               updated_at_ms
        FROM box_activities;
        DROP TABLE box_activities;
        ALTER TABLE box_activities_old RENAME TO box_activities;
        CREATE INDEX ix_box_activities_box ON box_activities(box_id);
        CREATE INDEX ix_box_activities_activity ON box_activities(activity_id);

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
          assigned_to TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          raised_at_ms INTEGER NOT NULL,
          resolved_at_ms INTEGER,
          resolution_notes TEXT
        );
        INSERT INTO quality_issues_old
          (quality_issue_id, box_id, wir_record_id, issue_type, severity,
           description, status, raised_by, assigned_to, raised_at_ms,
           resolved_at_ms, resolution_notes)
        SELECT quality_issue_id, box_id, wir_record_id, issue_type, severity,
               description, status, raised_by, assigned_to_team_id,
               raised_at_ms, resolved_at_ms, resolution_notes
        FROM quality_issues;
        DROP TABLE quality_issues;
        ALTER TABLE quality_issues_old RENAME TO quality_issues;
        CREATE INDEX ix_quality_issues_box ON quality_issues(box_id);
"#,
    )?;
    Ok(())
}
