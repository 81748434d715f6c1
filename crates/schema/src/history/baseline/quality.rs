#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE wir_checkpoints (
          wir_checkpoint_id INTEGER PRIMARY KEY AUTOINCREMENT,
          activity_id TEXT NOT NULL
            REFERENCES activity_master(activity_id) ON DELETE CASCADE,
          checkpoint_code TEXT NOT NULL,
          checkpoint_name TEXT NOT NULL,
          stage INTEGER NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE wir_checklist_items (
          checklist_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          wir_checkpoint_id INTEGER NOT NULL
            REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE CASCADE,
          item_text TEXT NOT NULL,
          item_order INTEGER NOT NULL DEFAULT 0,
          is_mandatory INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE wir_records (
          wir_record_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          wir_checkpoint_id INTEGER NOT NULL
            REFERENCES wir_checkpoints(wir_checkpoint_id) ON DELETE RESTRICT,
          wir_number TEXT NOT NULL,
          status TEXT NOT NULL DEFAULT 'Pending',
          requested_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          inspected_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          requested_at_ms INTEGER NOT NULL,
          inspected_at_ms INTEGER,
          result TEXT,
          remarks TEXT
        );

        CREATE TABLE quality_issues (
          quality_issue_id INTEGER PRIMARY KEY AUTOINCREMENT,
          box_id TEXT NOT NULL REFERENCES boxes(box_id) ON DELETE CASCADE,
          wir_record_id INTEGER
            REFERENCES wir_records(wir_record_id) ON DELETE SET NULL,
          issue_type TEXT NOT NULL,
          severity TEXT NOT NULL DEFAULT 'Minor',
          description TEXT NOT NULL,
          status TEXT NOT NULL DEFAULT 'Open',
          raised_by TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          assigned_to TEXT,
          photo_path TEXT,
          raised_at_ms INTEGER NOT NULL,
          resolved_at_ms INTEGER,
          resolution_notes TEXT
        );

        CREATE TABLE notifications (
          notification_id INTEGER PRIMARY KEY AUTOINCREMENT,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          body TEXT,
          notification_type TEXT,
          reference_id TEXT,
          is_read INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
"#;
