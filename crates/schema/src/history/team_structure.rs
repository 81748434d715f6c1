#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251109111931,
        name: "team_structure",
        up,
        down,
    }
}

// Members link to their team through an FK instead of copied-in department
// and email text, and the team leader becomes a member FK instead of a name.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE team_members_new (
          team_member_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          team_id TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          employee_code TEXT NOT NULL,
          employee_name TEXT NOT NULL,
          mobile_number TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO team_members_new
          (team_member_id, user_id, employee_code, employee_name,
           mobile_number, is_active)
        SELECT team_member_id, user_id, employee_code, employee_name,
               mobile_number, is_active
        FROM team_members;
        DROP TABLE team_members;
        ALTER TABLE team_members_new RENAME TO team_members;

        ALTER TABLE teams ADD COLUMN team_leader_id TEXT
          REFERENCES team_members(team_member_id) ON DELETE SET NULL;
        ALTER TABLE teams DROP COLUMN team_leader_name;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE teams_old (
          team_id TEXT PRIMARY KEY,
          team_code TEXT NOT NULL,
          team_name TEXT NOT NULL,
          department_id TEXT NOT NULL
            REFERENCES departments(department_id) ON DELETE RESTRICT,
          trade TEXT,
          team_leader_name TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO teams_old
          (team_id, team_code, team_name, department_id, trade,
           is_active, created_at_ms)
        SELECT team_id, team_code, team_name, department_id, trade,
               is_active, created_at_ms
        FROM teams;
        DROP TABLE teams;
        ALTER TABLE teams_old RENAME TO teams;
        CREATE UNIQUE INDEX ux_teams_code ON teams(team_code);

        CREATE TABLE team_members_old (
          team_member_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          employee_code TEXT NOT NULL,
          employee_name TEXT NOT NULL,
          department TEXT,
          email TEXT,
          mobile_number TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO team_members_old
          (team_member_id, user_id, employee_code, employee_name,
           mobile_number, is_active)
        SELECT team_member_id, user_id, employee_code, employee_name,
               mobile_number, is_active
        FROM team_members;
        DROP TABLE team_members;
        ALTER TABLE team_members_old RENAME TO team_members;
"#,
    )?;
    Ok(())
}
