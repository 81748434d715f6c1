#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251204104252,
        name: "progress_update_images",
        up,
        down,
    }
}

// One photo per update was not enough in the field. Updates get an image
// child table ordered by a per-update sequence number.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE progress_update_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          progress_update_id INTEGER NOT NULL
            REFERENCES progress_updates(progress_update_id) ON DELETE CASCADE,
          image_data TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_progress_update_images_seq
          ON progress_update_images(progress_update_id, sequence_number);

        INSERT INTO progress_update_images
          (progress_update_id, image_data, sequence_number, uploaded_at_ms)
        SELECT progress_update_id, photo, 1, reported_at_ms
        FROM progress_updates
        WHERE photo IS NOT NULL;

        ALTER TABLE progress_updates DROP COLUMN photo;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE progress_updates ADD COLUMN photo TEXT;
        UPDATE progress_updates SET photo = (
          SELECT i.image_data FROM progress_update_images i
          WHERE i.progress_update_id = progress_updates.progress_update_id
            AND i.sequence_number = 1
        );
        DROP TABLE progress_update_images;
"#,
    )?;
    Ok(())
}
