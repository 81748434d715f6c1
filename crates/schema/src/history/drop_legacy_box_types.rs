#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260105125222,
        name: "drop_legacy_box_types",
        up,
        down,
    }
}

// The global box taxonomy loses to the per-project one. Boxes re-point at
// the project configuration tables; type assignments restart from NULL
// because the global ids do not map onto per-project rows.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE boxes_new (
          box_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          box_tag TEXT NOT NULL,
          box_name TEXT,
          box_type_id INTEGER
            REFERENCES project_box_types(project_box_type_id) ON DELETE SET NULL,
          box_sub_type_id INTEGER
            REFERENCES project_box_sub_types(project_box_sub_type_id)
            ON DELETE SET NULL,
          serial_number TEXT,
          floor_number INTEGER,
          zone TEXT,
          length_mm NUMERIC,
          width_mm NUMERIC,
          height_mm NUMERIC,
          weight_kg NUMERIC,
          bim_model_reference TEXT,
          revit_element_id TEXT,
          qr_code TEXT,
          current_stage INTEGER NOT NULL DEFAULT 1,
          status TEXT NOT NULL DEFAULT 'Planned',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER,
          current_location_id TEXT
            REFERENCES factory_locations(location_id) ON DELETE SET NULL
        );
        INSERT INTO boxes_new
        SELECT box_id, project_id, box_tag, box_name, NULL, NULL,
               serial_number, floor_number, zone, length_mm, width_mm,
               height_mm, weight_kg, bim_model_reference, revit_element_id,
               qr_code, current_stage, status, progress_percent,
               planned_start_ms, planned_finish_ms, actual_start_ms,
               actual_finish_ms, created_at_ms, updated_at_ms,
               current_location_id
        FROM boxes;
        DROP TABLE boxes;
        ALTER TABLE boxes_new RENAME TO boxes;
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);

        CREATE TABLE projects_new (
          project_id TEXT PRIMARY KEY,
          project_code TEXT NOT NULL,
          project_name TEXT NOT NULL,
          client_name TEXT,
          location TEXT,
          start_date_ms INTEGER,
          planned_end_date_ms INTEGER,
          actual_end_date_ms INTEGER,
          status TEXT NOT NULL DEFAULT 'Active',
          total_boxes INTEGER NOT NULL DEFAULT 0,
          description TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        INSERT INTO projects_new
        SELECT project_id, project_code, project_name, client_name, location,
               start_date_ms, planned_end_date_ms, actual_end_date_ms, status,
               total_boxes, description, created_at_ms, updated_at_ms
        FROM projects;
        DROP TABLE projects;
        ALTER TABLE projects_new RENAME TO projects;
        CREATE UNIQUE INDEX ux_projects_code ON projects(project_code);

        DROP TABLE box_sub_types;
        DROP TABLE box_types;
        DROP TABLE project_type_categories;
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE project_type_categories (
          category_id TEXT PRIMARY KEY,
          category_name TEXT NOT NULL,
          display_order INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE TABLE box_types (
          box_type_id TEXT PRIMARY KEY,
          type_name TEXT NOT NULL,
          type_code TEXT NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );
        CREATE TABLE box_sub_types (
          box_sub_type_id TEXT PRIMARY KEY,
          box_type_id TEXT NOT NULL
            REFERENCES box_types(box_type_id) ON DELETE CASCADE,
          sub_type_name TEXT NOT NULL,
          sub_type_code TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        INSERT INTO project_type_categories
          (category_id, category_name, display_order, created_at_ms)
        VALUES
          ('ptc-residential', 'Residential', 10, 1730419200000),
          ('ptc-hospitality', 'Hospitality', 20, 1730419200000),
          ('ptc-healthcare',  'Healthcare',  30, 1730419200000),
          ('ptc-commercial',  'Commercial',  40, 1730419200000);
        INSERT INTO box_types
          (box_type_id, type_name, type_code, created_at_ms)
        VALUES
          ('bxt-bathroom', 'Bathroom Pod', 'BTH', 1730419200000),
          ('bxt-kitchen',  'Kitchen Pod',  'KIT', 1730419200000),
          ('bxt-room',     'Room Module',  'ROM', 1730419200000),
          ('bxt-corridor', 'Corridor Module', 'COR', 1730419200000);
        INSERT INTO box_sub_types
          (box_sub_type_id, box_type_id, sub_type_name, sub_type_code, created_at_ms)
        VALUES
          ('bst-bath-std', 'bxt-bathroom', 'Standard',   'STD', 1730419200000),
          ('bst-bath-acc', 'bxt-bathroom', 'Accessible', 'ACC', 1730419200000),
          ('bst-room-sgl', 'bxt-room',     'Single',     'SGL', 1730419200000),
          ('bst-room-dbl', 'bxt-room',     'Double',     'DBL', 1730419200000);

        CREATE TABLE projects_old (
          project_id TEXT PRIMARY KEY,
          project_code TEXT NOT NULL,
          project_name TEXT NOT NULL,
          client_name TEXT,
          location TEXT,
          start_date_ms INTEGER,
          planned_end_date_ms INTEGER,
          actual_end_date_ms INTEGER,
          status TEXT NOT NULL DEFAULT 'Active',
          total_boxes INTEGER NOT NULL DEFAULT 0,
          description TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER,
          category_id TEXT
            REFERENCES project_type_categories(category_id) ON DELETE SET NULL
        );
        INSERT INTO projects_old
        SELECT project_id, project_code, project_name, client_name, location,
               start_date_ms, planned_end_date_ms, actual_end_date_ms, status,
               total_boxes, description, created_at_ms, updated_at_ms, NULL
        FROM projects;
        DROP TABLE projects;
        ALTER TABLE projects_old RENAME TO projects;
        CREATE UNIQUE INDEX ux_projects_code ON projects(project_code);

        CREATE TABLE boxes_old (
          box_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          box_tag TEXT NOT NULL,
          box_name TEXT,
          box_type_id TEXT
            REFERENCES box_types(box_type_id) ON DELETE SET NULL,
          box_sub_type_id TEXT
            REFERENCES box_sub_types(box_sub_type_id) ON DELETE SET NULL,
          serial_number TEXT,
          floor_number INTEGER,
          zone TEXT,
          length_mm NUMERIC,
          width_mm NUMERIC,
          height_mm NUMERIC,
          weight_kg NUMERIC,
          bim_model_reference TEXT,
          revit_element_id TEXT,
          qr_code TEXT,
          current_stage INTEGER NOT NULL DEFAULT 1,
          status TEXT NOT NULL DEFAULT 'Planned',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER,
          current_location_id TEXT
            REFERENCES factory_locations(location_id) ON DELETE SET NULL
        );
        INSERT INTO boxes_old
        SELECT box_id, project_id, box_tag, box_name, NULL, NULL,
               serial_number, floor_number, zone, length_mm, width_mm,
               height_mm, weight_kg, bim_model_reference, revit_element_id,
               qr_code, current_stage, status, progress_percent,
               planned_start_ms, planned_finish_ms, actual_start_ms,
               actual_finish_ms, created_at_ms, updated_at_ms,
               current_location_id
        FROM boxes;
        DROP TABLE boxes;
        ALTER TABLE boxes_old RENAME TO boxes;
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);
"#,
    )?;
    Ok(())
}
