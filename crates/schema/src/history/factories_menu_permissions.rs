#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251222000000,
        name: "factories_menu_permissions",
        up,
        down,
    }
}

// Seed-only follow-up to the factories table: a menu entry plus the view
// and manage permissions, granted to the administrator role.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        VALUES
          ('perm-factories-view',   'factories', 'view',   'factories.view',   'View Factories',   'Modules', 35, 1730419200000),
          ('perm-factories-manage', 'factories', 'manage', 'factories.manage', 'Manage Factories', 'Modules', 36, 1730419200000);

        INSERT INTO role_permissions
          (role_permission_id, role_id, permission_id, granted_at_ms)
        VALUES
          ('rp-admin-factories-view',   'role-system-admin', 'perm-factories-view',   1730419200000),
          ('rp-admin-factories-manage', 'role-system-admin', 'perm-factories-manage', 1730419200000);

        INSERT INTO navigation_menu_items
          (menu_item_id, parent_menu_item_id, title, icon, route,
           display_order, required_permission_key, created_at_ms)
        VALUES
          ('mnu-factories', NULL, 'Factories', 'factory', '/factories',
           45, 'factories.view', 1730419200000);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM navigation_menu_items WHERE menu_item_id = 'mnu-factories';
        DELETE FROM role_permissions
        WHERE role_permission_id IN
          ('rp-admin-factories-view', 'rp-admin-factories-manage');
        DELETE FROM permissions
        WHERE permission_id IN ('perm-factories-view', 'perm-factories-manage');
"#,
    )?;
    Ok(())
}
