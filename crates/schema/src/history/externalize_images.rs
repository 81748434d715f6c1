#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260112090102,
        name: "externalize_images",
        up,
        down,
    }
}

// Base64 blobs made the database balloon; images move to object storage
// and the child tables keep only the stored file name. Inline data is not
// carried over: the upload service re-writes rows as it migrates files.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE progress_update_images;
        CREATE TABLE progress_update_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          progress_update_id INTEGER NOT NULL
            REFERENCES progress_updates(progress_update_id) ON DELETE CASCADE,
          file_name TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_progress_update_images_seq
          ON progress_update_images(progress_update_id, sequence_number);

        DROP TABLE quality_issue_images;
        CREATE TABLE quality_issue_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          quality_issue_id INTEGER NOT NULL
            REFERENCES quality_issues(quality_issue_id) ON DELETE CASCADE,
          file_name TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_quality_issue_images_seq
          ON quality_issue_images(quality_issue_id, sequence_number);

        DROP TABLE wir_checkpoint_images;
        CREATE TABLE wir_checkpoint_images (
          image_id INTEGER PRIMARY KEY AUTOINCREMENT,
          wir_checkpoint_id INTEGER NOT NULL
            REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE CASCADE,
          file_name TEXT NOT NULL,
          sequence_number INTEGER NOT NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE UNIQUE INDEX ux_wir_checkpoint_images_seq
          ON wir_checkpoint_images(wir_checkpoint_id, sequence_number);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP TABLE wir_checkpoint_images;
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

        DROP TABLE quality_issue_images;
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

        DROP TABLE progress_update_images;
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
"#,
    )?;
    Ok(())
}
