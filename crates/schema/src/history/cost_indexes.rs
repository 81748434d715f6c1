#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260120083107,
        name: "cost_indexes",
        up,
        down,
    }
}

// The cost screens filter on every one of these columns; full scans of
// the masters were the top entries in the slow-query log.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE INDEX ix_cost_codes_master_category
          ON cost_codes_master(category);
        CREATE INDEX ix_cost_codes_master_sub_category
          ON cost_codes_master(sub_category);
        CREATE INDEX ix_cost_codes_master_active ON cost_codes_master(is_active);
        CREATE INDEX ix_cost_codes_master_order
          ON cost_codes_master(display_order);
        CREATE INDEX ix_cost_codes_master_level_1 ON cost_codes_master(level_1);
        CREATE INDEX ix_cost_codes_master_level_2 ON cost_codes_master(level_2);
        CREATE INDEX ix_cost_codes_master_level_3 ON cost_codes_master(level_3);

        CREATE INDEX ix_hr_cost_records_chapter ON hr_cost_records(chapter);
        CREATE INDEX ix_hr_cost_records_sub_chapter
          ON hr_cost_records(sub_chapter);
        CREATE INDEX ix_hr_cost_records_classification
          ON hr_cost_records(classification);
        CREATE INDEX ix_hr_cost_records_trade ON hr_cost_records(trade);
        CREATE INDEX ix_hr_cost_records_position ON hr_cost_records(position);
        CREATE INDEX ix_hr_cost_records_cost_type ON hr_cost_records(cost_type);
        CREATE INDEX ix_hr_cost_records_active ON hr_cost_records(is_active);

        CREATE INDEX ix_project_cost_items_project
          ON project_cost_items(project_id);
        CREATE INDEX ix_project_cost_items_code
          ON project_cost_items(cost_code_id);
        CREATE INDEX ix_project_cost_items_box ON project_cost_items(box_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DROP INDEX ix_project_cost_items_box;
        DROP INDEX ix_project_cost_items_code;
        DROP INDEX ix_project_cost_items_project;
        DROP INDEX ix_hr_cost_records_active;
        DROP INDEX ix_hr_cost_records_cost_type;
        DROP INDEX ix_hr_cost_records_position;
        DROP INDEX ix_hr_cost_records_trade;
        DROP INDEX ix_hr_cost_records_classification;
        DROP INDEX ix_hr_cost_records_sub_chapter;
        DROP INDEX ix_hr_cost_records_chapter;
        DROP INDEX ix_cost_codes_master_level_3;
        DROP INDEX ix_cost_codes_master_level_2;
        DROP INDEX ix_cost_codes_master_level_1;
        DROP INDEX ix_cost_codes_master_order;
        DROP INDEX ix_cost_codes_master_active;
        DROP INDEX ix_cost_codes_master_sub_category;
        DROP INDEX ix_cost_codes_master_category;
"#,
    )?;
    Ok(())
}
