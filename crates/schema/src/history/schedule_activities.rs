#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113185258,
        name: "schedule_activities",
        up,
        down,
    }
}

// Project-level schedule lines, independent of the per-box activity
// tracker, with link tables for the materials and teams each line needs.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE schedule_activities (
          schedule_activity_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          activity_name TEXT NOT NULL,
          wbs_code TEXT,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          status TEXT NOT NULL DEFAULT 'NotStarted',
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        CREATE INDEX ix_schedule_activities_project
          ON schedule_activities(project_id);

        CREATE TABLE schedule_activity_materials (
          schedule_activity_material_id INTEGER PRIMARY KEY AUTOINCREMENT,
          schedule_activity_id TEXT NOT NULL
            REFERENCES schedule_activities(schedule_activity_id)
            ON DELETE CASCADE,
          material_id TEXT NOT NULL
            REFERENCES materials(material_id) ON DELETE RESTRICT,
          planned_quantity NUMERIC NOT NULL DEFAULT 0
        );

        CREATE TABLE schedule_activity_teams (
          schedule_activity_team_id INTEGER PRIMARY KEY AUTOINCREMENT,
          schedule_activity_id TEXT NOT NULL
            REFERENCES schedule_activities(schedule_activity_id)
            ON DELETE CASCADE,
          team_id TEXT NOT NULL REFERENCES teams(team_id) ON DELETE CASCADE
        );
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE schedule_activity_teams;
        DROP TABLE schedule_activity_materials;
        DROP TABLE schedule_activities;
"#,
    )?;
    Ok(())
}
