#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113175142,
        name: "ensure_module_permissions",
        up,
        down,
    }
}

// Back-fills the view permissions for the newer modules. Environments
// that were patched by hand already carry some of these keys, so every
// insert is guarded and grants resolve the permission id by key.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        SELECT 'perm-materials-view', 'materials', 'view', 'materials.view',
               'View Materials', 'Modules', 90, 1730419200000
        WHERE NOT EXISTS
          (SELECT 1 FROM permissions WHERE permission_key = 'materials.view');

        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        SELECT 'perm-cost-view', 'cost', 'view', 'cost.view',
               'View Cost Management', 'Modules', 100, 1730419200000
        WHERE NOT EXISTS
          (SELECT 1 FROM permissions WHERE permission_key = 'cost.view');

        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        SELECT 'perm-schedule-view', 'schedule', 'view', 'schedule.view',
               'View Schedule', 'Modules', 110, 1730419200000
        WHERE NOT EXISTS
          (SELECT 1 FROM permissions WHERE permission_key = 'schedule.view');

        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        SELECT 'perm-bim-view', 'bim', 'view', 'bim.view',
               'View BIM Models', 'Modules', 120, 1730419200000
        WHERE NOT EXISTS
          (SELECT 1 FROM permissions WHERE permission_key = 'bim.view');

        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        SELECT 'perm-help-view', 'help', 'view', 'help.view',
               'View Help', 'General', 130, 1730419200000
        WHERE NOT EXISTS
          (SELECT 1 FROM permissions WHERE permission_key = 'help.view');

        INSERT INTO role_permissions
          (role_permission_id, role_id, permission_id, granted_at_ms)
        SELECT 'rp-admin-' || p.module || '-view', 'role-system-admin',
               p.permission_id, 1730419200000
        FROM permissions p
        WHERE p.permission_key IN
            ('materials.view', 'cost.view', 'schedule.view',
             'bim.view', 'help.view')
          AND NOT EXISTS (
            SELECT 1 FROM role_permissions rp
            WHERE rp.role_id = 'role-system-admin'
              AND rp.permission_id = p.permission_id
          );
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM role_permissions
        WHERE role_id = 'role-system-admin'
          AND permission_id IN (
            SELECT permission_id FROM permissions
            WHERE permission_key IN
              ('materials.view', 'cost.view', 'schedule.view',
               'bim.view', 'help.view')
          );
        DELETE FROM permissions
        WHERE permission_key IN
          ('materials.view', 'cost.view', 'schedule.view',
           'bim.view', 'help.view');
"#,
    )?;
    Ok(())
}
