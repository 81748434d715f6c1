#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251221090215,
        name: "factories",
        up,
        down,
    }
}

// Production spreads across more than one factory; locations now belong
// to a factory.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE factories (
          factory_id TEXT PRIMARY KEY,
          factory_code TEXT NOT NULL,
          factory_name TEXT NOT NULL,
          location TEXT,
          capacity INTEGER,
          current_occupancy INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_factories_code ON factories(factory_code);

        ALTER TABLE factory_locations ADD COLUMN factory_id TEXT
          REFERENCES factories(factory_id) ON DELETE SET NULL;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE factory_locations_old (
          location_id TEXT PRIMARY KEY,
          location_code TEXT NOT NULL,
          location_name TEXT NOT NULL,
          location_type TEXT NOT NULL,
          capacity INTEGER,
          is_active INTEGER NOT NULL DEFAULT 1
        );
        INSERT INTO factory_locations_old
          (location_id, location_code, location_name, location_type,
           capacity, is_active)
        SELECT location_id, location_code, location_name, location_type,
               capacity, is_active
        FROM factory_locations;
        DROP TABLE factory_locations;
        ALTER TABLE factory_locations_old RENAME TO factory_locations;

        DROP TABLE factories;
"#,
    )?;
    Ok(())
}
