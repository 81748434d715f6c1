#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260119213820,
        name: "hr_cost_code_levels",
        up,
        down,
    }
}

// Both cost masters adopt the estimator's three-level coding scheme. The
// HR rate card is rebuilt around chapter/sub-chapter/classification;
// cost_codes_master keeps its shape and just gains the level columns.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE hr_cost_records_new (
          hr_cost_record_id TEXT PRIMARY KEY,
          chapter TEXT NOT NULL DEFAULT 'General',
          sub_chapter TEXT,
          classification TEXT,
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
        INSERT INTO hr_cost_records_new
          (hr_cost_record_id, chapter, sub_chapter, classification, code,
           name, trade, position, hourly_rate, daily_rate, monthly_rate,
           overtime_rate, currency, cost_type, is_active, created_at_ms,
           updated_at_ms)
        SELECT hr_cost_record_id, 'General', NULL, trade, code,
               name, trade, position, hourly_rate, daily_rate, monthly_rate,
               overtime_rate, currency, cost_type, is_active, created_at_ms,
               updated_at_ms
        FROM hr_cost_records;
        DROP TABLE hr_cost_records;
        ALTER TABLE hr_cost_records_new RENAME TO hr_cost_records;
        CREATE UNIQUE INDEX ux_hr_cost_records_code ON hr_cost_records(code);

        ALTER TABLE cost_codes_master ADD COLUMN level_1 TEXT;
        ALTER TABLE cost_codes_master ADD COLUMN level_2 TEXT;
        ALTER TABLE cost_codes_master ADD COLUMN level_3 TEXT;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        ALTER TABLE cost_codes_master DROP COLUMN level_3;
        ALTER TABLE cost_codes_master DROP COLUMN level_2;
        ALTER TABLE cost_codes_master DROP COLUMN level_1;

        CREATE TABLE hr_cost_records_old (
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
        INSERT INTO hr_cost_records_old
          (hr_cost_record_id, code, name, trade, position, hourly_rate,
           daily_rate, monthly_rate, overtime_rate, currency, cost_type,
           is_active, created_at_ms, updated_at_ms)
        SELECT hr_cost_record_id, code, name, trade, position, hourly_rate,
               daily_rate, monthly_rate, overtime_rate, currency, cost_type,
               is_active, created_at_ms, updated_at_ms
        FROM hr_cost_records;
        DROP TABLE hr_cost_records;
        ALTER TABLE hr_cost_records_old RENAME TO hr_cost_records;
        CREATE UNIQUE INDEX ux_hr_cost_records_code ON hr_cost_records(code);
"#,
    )?;
    Ok(())
}
