#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260113163725,
        name: "hr_cost_records",
        up,
        down,
    }
}

// Labour side of the cost module: one rate card row per trade/position.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE hr_cost_records (
          hr_cost_record_id TEXT PRIMARY KEY,
          code TEXT NOT NULL,
          name TEXT NOT NULL,
          trade TEXT,
          position TEXT,
          hourly_rate NUMERIC,
          daily_rate NUMERIC,
          monthly_rate NUMERIC,
          overtime_rate NUMERIC,
          currency TEXT NOT NULL DEFAULT 'AED',
          cost_type TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        CREATE UNIQUE INDEX ux_hr_cost_records_code ON hr_cost_records(code);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch("DROP TABLE hr_cost_records;")?;
    Ok(())
}
