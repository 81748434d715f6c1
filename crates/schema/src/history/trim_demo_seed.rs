#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251209135311,
        name: "trim_demo_seed",
        up,
        down,
    }
}

// Real accounts exist now; the one-per-role demo users go away. Only the
// system administrator survives. Role and group assignments cascade, but
// the deletes are explicit so the intent reads from the SQL.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM user_groups WHERE user_id <> 'usr-admin';
        DELETE FROM user_roles WHERE user_id <> 'usr-admin';
        DELETE FROM users WHERE user_id <> 'usr-admin';
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO users
          (user_id, email, password_hash, full_name, department_id, created_at_ms)
        VALUES
          ('usr-pm',     'pm@example.com',          '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo Project Manager', 'dep-mgmt',  1730419200000),
          ('usr-se',     'engineer@example.com',    '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo Site Engineer',   'dep-eng',   1730419200000),
          ('usr-fore',   'foreman@example.com',     '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo Foreman',         'dep-const', 1730419200000),
          ('usr-qc',     'inspector@example.com',   '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo QC Inspector',    'dep-qlty',  1730419200000),
          ('usr-proc',   'procurement@example.com', '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo Buyer',           'dep-proc',  1730419200000),
          ('usr-hse',    'hse@example.com',         '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo HSE Officer',     'dep-hse',   1730419200000),
          ('usr-design', 'design@example.com',      '8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918', 'Demo Design Engineer', 'dep-eng',   1730419200000);

        INSERT INTO user_roles (user_role_id, user_id, role_id, assigned_at_ms)
        VALUES
          ('ur-pm',     'usr-pm',     'role-project-manager',     1730419200000),
          ('ur-se',     'usr-se',     'role-site-engineer',       1730419200000),
          ('ur-fore',   'usr-fore',   'role-foreman',             1730419200000),
          ('ur-qc',     'usr-qc',     'role-qc-inspector',        1730419200000),
          ('ur-proc',   'usr-proc',   'role-procurement-officer', 1730419200000),
          ('ur-hse',    'usr-hse',    'role-hse-officer',         1730419200000),
          ('ur-design', 'usr-design', 'role-design-engineer',     1730419200000);

        INSERT INTO user_groups (user_group_id, user_id, group_id, joined_at_ms)
        VALUES
          ('ug-pm',     'usr-pm',     'grp-management',   1730419200000),
          ('ug-se',     'usr-se',     'grp-engineering',  1730419200000),
          ('ug-fore',   'usr-fore',   'grp-construction', 1730419200000),
          ('ug-qc',     'usr-qc',     'grp-quality',      1730419200000),
          ('ug-proc',   'usr-proc',   'grp-procurement',  1730419200000),
          ('ug-hse',    'usr-hse',    'grp-hse',          1730419200000),
          ('ug-design', 'usr-design', 'grp-engineering',  1730419200000);
"#,
    )?;
    Ok(())
}
