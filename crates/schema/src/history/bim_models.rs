#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113193010,
        name: "bim_models",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE bim_models (
          bim_model_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          model_name TEXT NOT NULL,
          category TEXT,
          revit_family TEXT,
          revit_type TEXT,
          instance_count INTEGER,
          quantity NUMERIC,
          model_date_ms INTEGER,
          file_name TEXT,
          file_path TEXT,
          uploaded_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          created_at_ms INTEGER NOT NULL
        );
        CREATE INDEX ix_bim_models_project ON bim_models(project_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch("DROP TABLE bim_models;")?;
    Ok(())
}
