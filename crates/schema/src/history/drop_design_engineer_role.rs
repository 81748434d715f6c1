#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251209140918,
        name: "drop_design_engineer_role",
        up,
        down,
    }
}

// Design work moved out of this system, so the role and its group grants
// are retired. trim_demo_seed already removed the last user holding it.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM group_roles WHERE role_id = 'role-design-engineer';
        DELETE FROM role_permissions WHERE role_id = 'role-design-engineer';
        DELETE FROM user_roles WHERE role_id = 'role-design-engineer';
        DELETE FROM roles WHERE role_id = 'role-design-engineer';
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO roles (role_id, role_name, created_at_ms)
        VALUES ('role-design-engineer', 'DesignEngineer', 1730419200000);
        INSERT INTO group_roles (group_role_id, group_id, role_id, assigned_at_ms)
        VALUES ('gr-eng-design', 'grp-engineering', 'role-design-engineer', 1730419200000);
"#,
    )?;
    Ok(())
}
