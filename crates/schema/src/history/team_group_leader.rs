#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251216082145,
        name: "team_group_leader",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE team_groups ADD COLUMN group_leader_id TEXT
          REFERENCES team_members(team_member_id) ON DELETE SET NULL;
        ALTER TABLE team_groups ADD COLUMN group_code TEXT;
        ALTER TABLE team_groups ADD COLUMN group_tag TEXT;
        ALTER TABLE team_groups ADD COLUMN group_type TEXT;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE team_groups_old (
          team_group_id TEXT PRIMARY KEY,
          team_id TEXT NOT NULL REFERENCES teams(team_id) ON DELETE CASCADE,
          group_name TEXT NOT NULL,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO team_groups_old
          (team_group_id, team_id, group_name, is_active, created_at_ms)
        SELECT team_group_id, team_id, group_name, is_active, created_at_ms
        FROM team_groups;
        DROP TABLE team_groups;
        ALTER TABLE team_groups_old RENAME TO team_groups;
"#,
    )?;
    Ok(())
}
