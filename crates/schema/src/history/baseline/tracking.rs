#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE factory_locations (
          location_id TEXT PRIMARY KEY,
          location_code TEXT NOT NULL,
          location_name TEXT NOT NULL,
          location_type TEXT NOT NULL,
          capacity INTEGER,
          is_active INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE box_location_history (
          location_history_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          location_id TEXT NOT NULL
            REFERENCES factory_locations(location_id) ON DELETE RESTRICT,
          moved_at_ms INTEGER NOT NULL,
          remarks TEXT
        );

        CREATE TABLE cost_categories (
          cost_category_id TEXT PRIMARY KEY,
          category_name TEXT NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE box_costs (
          box_cost_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          cost_category_id TEXT NOT NULL
            REFERENCES cost_categories(cost_category_id) ON DELETE RESTRICT,
          description TEXT,
          amount NUMERIC NOT NULL,
          incurred_at_ms INTEGER NOT NULL,
          recorded_by TEXT REFERENCES users(user_id) ON DELETE SET NULL
        );

        CREATE TABLE risks (
          risk_id INTEGER PRIMARY KEY AUTOINCREMENT,
          project_id TEXT NOT NULL
            REFERENCES projects(project_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          description TEXT,
          probability TEXT NOT NULL DEFAULT 'Medium',
          impact TEXT NOT NULL DEFAULT 'Medium',
          mitigation_plan TEXT,
          status TEXT NOT NULL DEFAULT 'Open',
          owner TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          identified_at_ms INTEGER NOT NULL,
          closed_at_ms INTEGER
        );

        CREATE TABLE audit_log (
          audit_id INTEGER PRIMARY KEY AUTOINCREMENT,
          user_id TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          entity_type TEXT NOT NULL,
          entity_id TEXT NOT NULL,
          action TEXT NOT NULL,
          details TEXT,
          occurred_at_ms INTEGER NOT NULL
        );
"#;
