#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE UNIQUE INDEX ux_projects_code ON projects(project_code);
        CREATE UNIQUE INDEX ux_boxes_project_tag ON boxes(project_id, box_tag);
        CREATE UNIQUE INDEX ux_users_email ON users(email);
        CREATE UNIQUE INDEX ux_materials_code ON materials(material_code);
        CREATE UNIQUE INDEX ux_teams_code ON teams(team_code);
        CREATE UNIQUE INDEX ux_activity_master_seq
          ON activity_master(stage, sequence_order);
        CREATE UNIQUE INDEX ux_wir_records_number ON wir_records(wir_number);
        CREATE INDEX ix_box_activities_box ON box_activities(box_id);
        CREATE INDEX ix_box_activities_activity ON box_activities(activity_id);
        CREATE INDEX ix_box_materials_box ON box_materials(box_id);
        CREATE INDEX ix_material_transactions_material
          ON material_transactions(material_id);
        CREATE INDEX ix_quality_issues_box ON quality_issues(box_id);
        CREATE INDEX ix_wir_records_box ON wir_records(box_id);
        CREATE INDEX ix_box_location_history_box ON box_location_history(box_id);
        CREATE INDEX ix_notifications_user ON notifications(user_id);
        CREATE INDEX ix_audit_log_entity ON audit_log(entity_type, entity_id);
"#;
