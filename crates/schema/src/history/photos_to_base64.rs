#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251204072643,
        name: "photos_to_base64",
        up,
        down,
    }
}

// Photos move off the shared drive into the database as base64 text.
// Short-lived: the image child tables replace these columns within days.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE quality_issues DROP COLUMN photo_path;
        ALTER TABLE quality_issues ADD COLUMN photo TEXT;
        ALTER TABLE progress_updates DROP COLUMN photo_path;
        ALTER TABLE progress_updates ADD COLUMN photo TEXT;
        ALTER TABLE wir_checkpoints ADD COLUMN photo TEXT;
        ALTER TABLE wir_records ADD COLUMN photo TEXT;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE wir_records DROP COLUMN photo;
        ALTER TABLE wir_checkpoints DROP COLUMN photo;
        ALTER TABLE progress_updates DROP COLUMN photo;
        ALTER TABLE progress_updates ADD COLUMN photo_path TEXT;
        ALTER TABLE quality_issues DROP COLUMN photo;
        ALTER TABLE quality_issues ADD COLUMN photo_path TEXT;
"#,
    )?;
    Ok(())
}
