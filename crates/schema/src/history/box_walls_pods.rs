#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260118065416,
        name: "box_walls_pods",
        up,
        down,
    }
}

// Assembly tracking wants per-wall completion flags and, for boxes built
// around a prefabricated pod, the pod's identity and delivery state.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE boxes ADD COLUMN wall_1 INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE boxes ADD COLUMN wall_2 INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE boxes ADD COLUMN wall_3 INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE boxes ADD COLUMN wall_4 INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE boxes ADD COLUMN pod_deliver INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE boxes ADD COLUMN pod_name TEXT;
        ALTER TABLE boxes ADD COLUMN pod_type TEXT;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE boxes DROP COLUMN pod_type;
        ALTER TABLE boxes DROP COLUMN pod_name;
        ALTER TABLE boxes DROP COLUMN pod_deliver;
        ALTER TABLE boxes DROP COLUMN wall_4;
        ALTER TABLE boxes DROP COLUMN wall_3;
        ALTER TABLE boxes DROP COLUMN wall_2;
        ALTER TABLE boxes DROP COLUMN wall_1;
"#,
    )?;
    Ok(())
}
