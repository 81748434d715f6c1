#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE activity_master (
          activity_id TEXT PRIMARY KEY,
          activity_name TEXT NOT NULL,
          stage INTEGER NOT NULL,
          sequence_order INTEGER NOT NULL,
          is_wir_activity INTEGER NOT NULL DEFAULT 0,
          is_active INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE projects (
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

        CREATE TABLE boxes (
          box_id TEXT PRIMARY KEY,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          box_tag TEXT NOT NULL,
          box_name TEXT,
          box_type TEXT,
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
          updated_at_ms INTEGER
        );

        CREATE TABLE box_activities (
          box_activity_id TEXT PRIMARY KEY,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE RESTRICT,
          status TEXT NOT NULL DEFAULT 'NotStarted',
          progress_percent NUMERIC NOT NULL DEFAULT 0,
          planned_start_ms INTEGER,
          planned_finish_ms INTEGER,
          actual_start_ms INTEGER,
          actual_finish_ms INTEGER,
          assigned_team_id TEXT REFERENCES teams(team_id) ON DELETE SET NULL,
          materials_needed TEXT,
          remarks TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );

        CREATE TABLE activity_dependencies (
          dependency_id TEXT PRIMARY KEY,
          activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE CASCADE,
          depends_on_activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE CASCADE,
          dependency_type TEXT NOT NULL DEFAULT 'FinishToStart'
        );

        CREATE TABLE progress_updates (
          progress_update_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_activity_id TEXT NOT NULL
            REFERENCES box_activities(box_activity_id) ON DELETE CASCADE,
          reported_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          progress_percent NUMERIC NOT NULL,
          remarks TEXT,
          photo_path TEXT,
          reported_at_ms INTEGER NOT NULL
        );

        CREATE TABLE daily_production_log (
          log_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          log_date_ms INTEGER NOT NULL,
          boxes_started INTEGER NOT NULL DEFAULT 0,
          boxes_completed INTEGER NOT NULL DEFAULT 0,
          manpower_count INTEGER,
          weather TEXT,
          remarks TEXT,
          logged_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE box_assets (
          box_asset_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          asset_type TEXT NOT NULL,
          file_name TEXT NOT NULL,
          file_path TEXT NOT NULL,
          uploaded_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          uploaded_at_ms INTEGER NOT NULL
        );
"#;
