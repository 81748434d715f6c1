#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251214164843,
        name: "seed_checklist_library",
        up,
        down,
    }
}

fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO checklist_categories
          (category_id, category_name, category_code, display_order, created_at_ms)
        VALUES
          ('cat-structure', 'Structural',    'ST', 10, 1730419200000),
          ('cat-mech',      'Mechanical',    'ME', 20, 1730419200000),
          ('cat-elec',      'Electrical',    'EL', 30, 1730419200000),
          ('cat-arch',      'Architectural', 'AR', 40, 1730419200000),
          ('cat-mep-final', 'Final MEP',     'MF', 50, 1730419200000),
          ('cat-handover',  'Handover',      'HO', 60, 1730419200000);

        INSERT INTO checklist_references
          (reference_id, reference_code, title, created_at_ms)
        VALUES
          ('ref-qcs-st', 'QCS-ST-01', 'Structural Steel Works Standard', 1730419200000),
          ('ref-qcs-me', 'QCS-ME-01', 'Mechanical Installations Standard', 1730419200000),
          ('ref-qcs-el', 'QCS-EL-01', 'Electrical Installations Standard', 1730419200000),
          ('ref-qcs-ar', 'QCS-AR-01', 'Architectural Finishes Standard', 1730419200000);

        INSERT INTO predefined_checklist_items
          (category_id, reference_id, item_number, item_text, item_order)
        VALUES
          ('cat-structure', 'ref-qcs-st', 'ST-001', 'Frame dimensions within tolerance',          10),
          ('cat-structure', 'ref-qcs-st', 'ST-002', 'Weld quality visually acceptable',           20),
          ('cat-structure', 'ref-qcs-st', 'ST-003', 'Anti-corrosion coating applied',             30),
          ('cat-mech',      'ref-qcs-me', 'ME-001', 'Duct joints sealed and supported',           10),
          ('cat-mech',      'ref-qcs-me', 'ME-002', 'Drainage slope verified',                    20),
          ('cat-mech',      'ref-qcs-me', 'ME-003', 'Pressure test witnessed and recorded',       30),
          ('cat-elec',      'ref-qcs-el', 'EL-001', 'Containment routing per drawing',            10),
          ('cat-elec',      'ref-qcs-el', 'EL-002', 'Cable terminations torque-checked',          20),
          ('cat-elec',      'ref-qcs-el', 'EL-003', 'Earth continuity measured',                  30),
          ('cat-arch',      'ref-qcs-ar', 'AR-001', 'Tile alignment and grout finish acceptable', 10),
          ('cat-arch',      'ref-qcs-ar', 'AR-002', 'Paint finish free of defects',               20),
          ('cat-handover',  NULL,         'HO-001', 'Protection and wrapping complete',           10);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM predefined_checklist_items
        WHERE item_number IN
          ('ST-001','ST-002','ST-003','ME-001','ME-002','ME-003',
           'EL-001','EL-002','EL-003','AR-001','AR-002','HO-001');
        DELETE FROM checklist_references
        WHERE reference_id IN ('ref-qcs-st','ref-qcs-me','ref-qcs-el','ref-qcs-ar');
        DELETE FROM checklist_categories
        WHERE category_id IN
          ('cat-structure','cat-mech','cat-elec','cat-arch',
           'cat-mep-final','cat-handover');
"#,
    )?;
    Ok(())
}
