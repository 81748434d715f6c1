#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251215081707,
        name: "seed_wir_checklists",
        up,
        down,
    }
}

// One checklist per WIR gate, each keyed back to the WIR activity it
// covers through wir_code.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        INSERT INTO checklists
          (checklist_id, name, code, discipline, wir_code,
           signature_roles_json, created_at_ms)
        VALUES
          ('chk-wir1', 'Structure Inspection',  'WIR-01', 'Structural',    'act-s2-wir1', '["QCInspector","SiteEngineer"]', 1730419200000),
          ('chk-wir2', 'Mechanical Inspection', 'WIR-02', 'Mechanical',    'act-s3-wir2', '["QCInspector","SiteEngineer"]', 1730419200000),
          ('chk-wir3', 'Electrical Inspection', 'WIR-03', 'Electrical',    'act-s4-wir3', '["QCInspector","SiteEngineer"]', 1730419200000),
          ('chk-wir4', 'Finishes Inspection',   'WIR-04', 'Architectural', 'act-s5-wir4', '["QCInspector","SiteEngineer"]', 1730419200000),
          ('chk-wir5', 'Final MEP Inspection',  'WIR-05', 'MEP',           'act-s6-wir5', '["QCInspector","SiteEngineer"]', 1730419200000),
          ('chk-wir6', 'Handover Inspection',   'WIR-06', 'General',       'act-s7-wir6', '["QCInspector","ProjectManager"]', 1730419200000);

        INSERT INTO checklist_sections (section_id, checklist_id, title, section_order)
        VALUES
          ('sec-wir1-frame',  'chk-wir1', 'Frame and Welds',        10),
          ('sec-wir1-close',  'chk-wir1', 'Close-Up Readiness',     20),
          ('sec-wir2-duct',   'chk-wir2', 'Ductwork',               10),
          ('sec-wir2-pipe',   'chk-wir2', 'Piping',                 20),
          ('sec-wir3-contain','chk-wir3', 'Containment and Wiring', 10),
          ('sec-wir3-db',     'chk-wir3', 'Distribution Boards',    20),
          ('sec-wir4-wet',    'chk-wir4', 'Wet Areas',              10),
          ('sec-wir4-dry',    'chk-wir4', 'Dry Finishes',           20),
          ('sec-wir5-power',  'chk-wir5', 'Power and Lighting',     10),
          ('sec-wir5-water',  'chk-wir5', 'Water and Sanitary',     20),
          ('sec-wir6-final',  'chk-wir6', 'Final Walkthrough',      10),
          ('sec-wir6-wrap',   'chk-wir6', 'Protection and Dispatch',20);

        INSERT INTO predefined_checklist_items
          (section_id, item_number, item_text, item_order)
        VALUES
          ('sec-wir1-frame',  'WIR1-001', 'Frame square and level within tolerance', 10),
          ('sec-wir1-frame',  'WIR1-002', 'All structural welds inspected',          20),
          ('sec-wir1-close',  'WIR1-003', 'Rough-ins complete before close-up',      30),
          ('sec-wir2-duct',   'WIR2-001', 'Duct leakage test passed',                10),
          ('sec-wir2-pipe',   'WIR2-002', 'Drainage gradient confirmed',             20),
          ('sec-wir2-pipe',   'WIR2-003', 'Water lines pressure tested',             30),
          ('sec-wir3-contain','WIR3-001', 'Containment earthed and secured',         10),
          ('sec-wir3-db',     'WIR3-002', 'DB schedule matches installed circuits',  20),
          ('sec-wir4-wet',    'WIR4-001', 'Waterproofing verified before tiling',    10),
          ('sec-wir4-dry',    'WIR4-002', 'Paint and joinery defect-free',           20),
          ('sec-wir5-power',  'WIR5-001', 'All circuits energized and tested',       10),
          ('sec-wir5-water',  'WIR5-002', 'Sanitary fixtures flushed and checked',   20),
          ('sec-wir6-final',  'WIR6-001', 'Snag list closed out',                    10),
          ('sec-wir6-wrap',   'WIR6-002', 'Box wrapped and tagged for dispatch',     20);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        DELETE FROM predefined_checklist_items
        WHERE section_id IN (
          SELECT section_id FROM checklist_sections
          WHERE checklist_id LIKE 'chk-wir%'
        );
        DELETE FROM checklist_sections WHERE checklist_id LIKE 'chk-wir%';
        DELETE FROM checklists WHERE checklist_id LIKE 'chk-wir%';
"#,
    )?;
    Ok(())
}
