#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251216074904,
        name: "team_groups",
        up,
        down,
    }
}

// Large trade teams split into working groups; members can be assigned to
// one group within their team.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE team_groups (
          team_group_id TEXT PRIMARY KEY,
          team_id TEXT NOT NULL REFERENCES teams(team_id) ON DELETE CASCADE,
          group_name TEXT NOT NULL,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        ALTER TABLE team_members ADD COLUMN team_group_id TEXT
          REFERENCES team_groups(team_group_id) ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE team_members_old (
          team_member_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          team_id TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          employee_code TEXT NOT NULL,
          employee_name TEXT NOT NULL,
          mobile_number TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO team_members_old
          (team_member_id, user_id, team_id, employee_code, employee_name,
           mobile_number, is_active)
        SELECT team_member_id, user_id, team_id, employee_code, employee_name,
               mobile_number, is_active
        FROM team_members;
        DROP TABLE team_members;
        ALTER TABLE team_members_old RENAME TO team_members;

        DROP TABLE team_groups;
"#,
    )?;
    Ok(())
}
