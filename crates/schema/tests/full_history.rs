#![forbid(unsafe_code)]

use bx_schema::SchemaStore;
use bx_schema::support::{column_exists, row_count, table_exists};

#[test]
fn apply_all_runs_the_whole_history_in_order() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    let ran = store.apply_all().expect("apply all");
    assert_eq!(ran.len(), 44);

    let applied = store.applied().expect("read ledger");
    assert_eq!(applied.len(), 44);
    assert_eq!(applied.first().map(|m| m.version), Some(20251109080411));
    assert_eq!(applied.last().map(|m| m.version), Some(20260120184159));
    for pair in applied.windows(2) {
        assert!(
            pair[0].version < pair[1].version,
            "ledger must stay ordered: {} then {}",
            pair[0].version,
            pair[1].version
        );
    }

    let report = store.status().expect("status");
    assert_eq!(report.pending(), 0);
}

#[test]
fn apply_all_is_idempotent() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("first apply");
    let again = store.apply_all().expect("second apply");
    assert!(again.is_empty());
}

#[test]
fn final_schema_has_the_expected_shape() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    for table in [
        "projects",
        "boxes",
        "box_activities",
        "activity_materials",
        "material_transactions",
        "predefined_checklist_items",
        "checklists",
        "checklist_sections",
        "navigation_menu_items",
        "permissions",
        "role_permissions",
        "team_groups",
        "factories",
        "project_buildings",
        "project_box_types",
        "progress_update_images",
        "quality_issue_images",
        "wir_checkpoint_images",
        "cost_codes_master",
        "project_cost_items",
        "hr_cost_records",
        "schedule_activities",
        "bim_models",
        "issue_comments",
        "box_panels",
        "panel_types",
        "panel_delivery_notes",
        "panel_scan_logs",
    ] {
        assert!(
            table_exists(conn, table).expect("introspect"),
            "missing table {table}"
        );
    }

    // Retired along the way.
    for table in ["box_types", "box_sub_types", "project_type_categories"] {
        assert!(
            !table_exists(conn, table).expect("introspect"),
            "legacy table {table} should be gone"
        );
    }
    assert!(!table_exists(conn, "cost_codes").expect("introspect"));

    // Boxes carry the late-history columns and lost the free-text type.
    for column in [
        "current_location_id",
        "box_type_id",
        "box_sub_type_id",
        "wall_1",
        "wall_4",
        "pod_deliver",
        "pod_name",
        "pod_type",
    ] {
        assert!(
            column_exists(conn, "boxes", column).expect("introspect"),
            "boxes is missing {column}"
        );
    }
    assert!(!column_exists(conn, "boxes", "box_type").expect("introspect"));

    assert!(column_exists(conn, "wir_checkpoints", "version").expect("introspect"));
    assert!(column_exists(conn, "wir_checkpoints", "parent_wir_id").expect("introspect"));
    assert!(column_exists(conn, "notifications", "recipient_id").expect("introspect"));
    assert!(!column_exists(conn, "notifications", "user_id").expect("introspect"));
    assert!(column_exists(conn, "hr_cost_records", "chapter").expect("introspect"));
    assert!(column_exists(conn, "cost_codes_master", "level_3").expect("introspect"));

    // Image tables ended up on stored file names, not inline data.
    assert!(column_exists(conn, "quality_issue_images", "file_name").expect("introspect"));
    assert!(!column_exists(conn, "quality_issue_images", "image_data").expect("introspect"));
}

#[test]
fn material_keys_end_up_as_text_guids() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    let declared_type: String = conn
        .query_row(
            "SELECT type FROM pragma_table_info('materials') WHERE name = 'material_id'",
            [],
            |row| row.get(0),
        )
        .expect("materials.material_id type");
    assert_eq!(declared_type, "TEXT");

    for table in ["box_materials", "activity_materials", "material_transactions"] {
        let declared_type: String = conn
            .query_row(
                "SELECT type FROM pragma_table_info(?1) WHERE name = 'material_id'",
                [table],
                |row| row.get(0),
            )
            .expect("referencing material_id type");
        assert_eq!(declared_type, "TEXT", "{table}.material_id");
    }
}

#[test]
fn seed_rows_survive_to_the_tip() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    assert_eq!(row_count(conn, "activity_master").expect("count"), 43);
    let wir_gates: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM activity_master WHERE is_wir_activity = 1",
            [],
            |row| row.get(0),
        )
        .expect("wir gate count");
    assert_eq!(wir_gates, 6);

    assert_eq!(row_count(conn, "departments").expect("count"), 9);
    assert_eq!(row_count(conn, "groups").expect("count"), 8);
    // Ten seeded roles minus the retired design engineer.
    assert_eq!(row_count(conn, "roles").expect("count"), 9);
    assert_eq!(row_count(conn, "group_roles").expect("count"), 16);
    // Demo accounts were trimmed; only the administrator remains.
    assert_eq!(row_count(conn, "users").expect("count"), 1);

    assert_eq!(row_count(conn, "checklists").expect("count"), 6);
    assert_eq!(row_count(conn, "checklist_sections").expect("count"), 12);
    assert_eq!(row_count(conn, "checklist_categories").expect("count"), 6);
    assert_eq!(row_count(conn, "navigation_menu_items").expect("count"), 13);
    assert_eq!(row_count(conn, "permissions").expect("count"), 15);
    assert_eq!(row_count(conn, "role_permissions").expect("count"), 15);
}
