#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251204160953,
        name: "wir_checkpoint_images",
        up,
        down,
    }
}

// Closes out the inline-photo detour on the WIR side: checkpoint photos
// get the same child-table treatment, and the never-used inspection photo
// column goes away with them.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE wir_checkpoint_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          wir_checkpoint_id INTEGER NOT NULL
            REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE CASCADE,
          image_data TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_wir_checkpoint_images_seq
          ON wir_checkpoint_images(wir_checkpoint_id, sequence_number);

        ALTER TABLE wir_checkpoints DROP COLUMN photo;
        ALTER TABLE wir_records DROP COLUMN photo;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE wir_records ADD COLUMN photo TEXT;
        ALTER TABLE wir_checkpoints ADD COLUMN photo TEXT;
        DROP TABLE wir_checkpoint_images;
"#,
    )?;
    Ok(())
}
