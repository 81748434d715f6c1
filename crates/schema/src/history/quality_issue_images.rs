#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251204120235,
        name: "quality_issue_images",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE quality_issue_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          quality_issue_id INTEGER NOT NULL
            REFERENCES quality_issues(quality_issue_id) ON DELETE CASCADE,
          image_data TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_quality_issue_images_seq
          ON quality_issue_images(quality_issue_id, sequence_number);

        INSERT INTO quality_issue_images
          (quality_issue_id, image_data, sequence_number, uploaded_at_ms)
        SELECT quality_issue_id, photo, 1, raised_at_ms
        FROM quality_issues
        WHERE photo IS NOT NULL;

        ALTER TABLE quality_issues DROP COLUMN photo;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE quality_issues ADD COLUMN photo TEXT;
        UPDATE quality_issues SET photo = (
          SELECT i.image_data FROM quality_issue_images i
          WHERE i.quality_issue_id = quality_issues.quality_issue_id
            AND i.sequence_number = 1
        );
        DROP TABLE quality_issue_images;
"#,
    )?;
    Ok(())
}
