#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20251218170808,
        name: "project_categories_box_drawings",
        up,
        down,
    }
}

// Global classification masters: what kind of project, what kind of box.
// These later turn out to vary per project and are replaced by the
// project-configuration tables; see drop_legacy_box_types.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
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

        CREATE TABLE box_drawings (
          box_drawing_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          drawing_number TEXT NOT NULL,
          title TEXT,
          revision TEXT,
          file_name TEXT,
          uploaded_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
        CREATE INDEX ix_box_drawings_box ON box_drawings(box_id);

        ALTER TABLE projects ADD COLUMN category_id TEXT
          REFERENCES project_type_categories(category_id) ON DELETE SET NULL;

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
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
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
          updated_at_ms INTEGER
        );
        INSERT INTO projects_old
        SELECT project_id, project_code, project_name, client_name, location,
               start_date_ms, planned_end_date_ms, actual_end_date_ms, status,
               total_boxes, description, created_at_ms, updated_at_ms
        FROM projects;
        DROP TABLE projects;
        ALTER TABLE projects_old RENAME TO projects;
        CREATE UNIQUE INDEX ux_projects_code ON projects(project_code);

        DROP TABLE box_drawings;
        DROP TABLE box_sub_types;
        DROP TABLE box_types;
        DROP TABLE project_type_categories;
"#,
    )?;
    Ok(())
}
