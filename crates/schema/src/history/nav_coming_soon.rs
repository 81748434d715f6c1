#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113123826,
        name: "nav_coming_soon",
        up,
        down,
    }
}

// Placeholder entries for the modules landing this quarter, greyed out in
// the sidebar until their tables arrive.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE navigation_menu_items
          ADD COLUMN coming_soon INTEGER NOT NULL DEFAULT 0;

        INSERT INTO navigation_menu_items
          (menu_item_id, parent_menu_item_id, title, icon, route,
           display_order, required_permission_key, coming_soon, created_at_ms)
        VALUES
          ('mnu-cost',     NULL, 'Cost Management', 'coins',    '/cost',     100, 'cost.view',     1, 1730419200000),
          ('mnu-schedule', NULL, 'Schedule',        'calendar', '/schedule', 110, 'schedule.view', 1, 1730419200000),
          ('mnu-bim',      NULL, 'BIM Models',      'layers',   '/bim',      120, 'bim.view',      1, 1730419200000);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM navigation_menu_items
        WHERE menu_item_id IN ('mnu-cost', 'mnu-schedule', 'mnu-bim');
        ALTER TABLE navigation_menu_items DROP COLUMN coming_soon;
"#,
    )?;
    Ok(())
}
