#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251208160059,
        name: "navigation_menu",
        up,
        down,
    }
}

// The RBAC leaf tables arrive together with the menu they gate: permissions
// keyed by `module.action`, role grants, and a self-nesting menu tree whose
// entries name the permission they require.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE navigation_menu_items (
          menu_item_id TEXT PRIMARY KEY,
          parent_menu_item_id TEXT
            REFERENCES navigation_menu_items(menu_item_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          icon TEXT,
          route TEXT,
          display_order INTEGER NOT NULL DEFAULT 0,
          required_permission_key TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE permissions (
          permission_id TEXT PRIMARY KEY,
          module TEXT NOT NULL,
          action TEXT NOT NULL,
          permission_key TEXT NOT NULL,
          display_name TEXT NOT NULL,
          description TEXT,
          category TEXT,
          display_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_permissions_key ON permissions(permission_key);

        CREATE TABLE role_permissions (
          role_permission_id TEXT PRIMARY KEY,
          role_id TEXT NOT NULL
            REFERENCES roles(role_id) ON DELETE CASCADE,
          permission_id TEXT NOT NULL
            REFERENCES permissions(permission_id) ON DELETE CASCADE,
          granted_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_role_permissions_pair
          ON role_permissions(role_id, permission_id);

        INSERT INTO permissions
          (permission_id, module, action, permission_key, display_name,
           category, display_order, created_at_ms)
        VALUES
          ('perm-projects-view',      'projects',      'view', 'projects.view',      'View Projects',      'Modules', 10, 1730419200000),
          ('perm-boxes-view',         'boxes',         'view', 'boxes.view',         'View Boxes',         'Modules', 20, 1730419200000),
          ('perm-locations-view',     'locations',     'view', 'locations.view',     'View Locations',     'Modules', 30, 1730419200000),
          ('perm-teams-view',         'teams',         'view', 'teams.view',         'View Teams',         'Modules', 40, 1730419200000),
          ('perm-wir-view',           'wir',           'view', 'wir.view',           'View WIR',           'Modules', 50, 1730419200000),
          ('perm-reports-view',       'reports',       'view', 'reports.view',       'View Reports',       'Modules', 60, 1730419200000),
          ('perm-notifications-view', 'notifications', 'view', 'notifications.view', 'View Notifications', 'Modules', 70, 1730419200000),
          ('perm-users-view',         'users',         'view', 'users.view',         'View Users',         'Admin',   80, 1730419200000);

        INSERT INTO role_permissions
          (role_permission_id, role_id, permission_id, granted_at_ms)
        VALUES
          ('rp-admin-projects',      'role-system-admin', 'perm-projects-view',      1730419200000),
          ('rp-admin-boxes',         'role-system-admin', 'perm-boxes-view',         1730419200000),
          ('rp-admin-locations',     'role-system-admin', 'perm-locations-view',     1730419200000),
          ('rp-admin-teams',         'role-system-admin', 'perm-teams-view',         1730419200000),
          ('rp-admin-wir',           'role-system-admin', 'perm-wir-view',           1730419200000),
          ('rp-admin-reports',       'role-system-admin', 'perm-reports-view',       1730419200000),
          ('rp-admin-notifications', 'role-system-admin', 'perm-notifications-view', 1730419200000),
          ('rp-admin-users',         'role-system-admin', 'perm-users-view',         1730419200000);

        INSERT INTO navigation_menu_items
          (menu_item_id, parent_menu_item_id, title, icon, route,
           display_order, required_permission_key, created_at_ms)
        VALUES
          ('mnu-dashboard',     NULL, 'Dashboard',     'home',     '/',              10, NULL,                 1730419200000),
          ('mnu-projects',      NULL, 'Projects',      'folder',   '/projects',      20, 'projects.view',      1730419200000),
          ('mnu-boxes',         NULL, 'Boxes',         'cube',     '/boxes',         30, 'boxes.view',         1730419200000),
          ('mnu-locations',     NULL, 'Locations',     'map-pin',  '/locations',     40, 'locations.view',     1730419200000),
          ('mnu-teams',         NULL, 'Teams',         'users',    '/teams',         50, 'teams.view',         1730419200000),
          ('mnu-wir',           NULL, 'Inspections',   'clipboard','/wir',           60, 'wir.view',           1730419200000),
          ('mnu-reports',       NULL, 'Reports',       'chart',    '/reports',       70, 'reports.view',       1730419200000),
          ('mnu-notifications', NULL, 'Notifications', 'bell',     '/notifications', 80, 'notifications.view', 1730419200000),
          ('mnu-users',         NULL, 'User Admin',    'shield',   '/admin/users',   90, 'users.view',         1730419200000);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE role_permissions;
        DROP TABLE permissions;
        DROP TABLE navigation_menu_items;
"#,
    )?;
    Ok(())
}
