#![forbid(unsafe_code)]

use bx_schema::{SchemaError, SchemaStore};
use bx_schema::support::{column_exists, table_exists};

#[test]
fn revert_last_undoes_the_newest_migration() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");

    let reverted = store.revert_last().expect("revert last");
    assert_eq!(reverted, 20260120184159);

    let conn = store.connection();
    assert!(!table_exists(conn, "panel_types").expect("introspect"));
    assert!(!table_exists(conn, "panel_delivery_notes").expect("introspect"));
    assert!(table_exists(conn, "box_panels").expect("introspect"));
    assert!(!column_exists(conn, "box_panels", "barcode").expect("introspect"));

    let applied = store.applied().expect("ledger");
    assert_eq!(applied.len(), 43);
    assert_eq!(applied.last().map(|m| m.version), Some(20260120153413));
}

#[test]
fn revert_steps_walks_back_and_reapplies_cleanly() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");

    let reverted = store.revert_steps(3).expect("revert three");
    assert_eq!(reverted, vec![20260120184159, 20260120153413, 20260120083107]);
    assert!(!table_exists(store.connection(), "box_panels").expect("introspect"));

    let reapplied = store.apply_all().expect("reapply");
    assert_eq!(
        reapplied,
        vec![20260120083107, 20260120153413, 20260120184159]
    );
    assert_eq!(store.status().expect("status").pending(), 0);
}

#[test]
fn revert_to_stops_at_the_requested_version() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");

    let reverted = store.revert_to(20260113161331).expect("revert to cost_management");
    assert_eq!(reverted.len(), 12);

    let conn = store.connection();
    assert!(table_exists(conn, "cost_codes").expect("introspect"));
    assert!(!table_exists(conn, "cost_codes_master").expect("introspect"));
    assert!(!table_exists(conn, "hr_cost_records").expect("introspect"));
    assert!(!table_exists(conn, "bim_models").expect("introspect"));
    assert!(!column_exists(conn, "boxes", "wall_1").expect("introspect"));

    let applied = store.applied().expect("ledger");
    assert_eq!(applied.last().map(|m| m.version), Some(20260113161331));
}

#[test]
fn revert_stops_with_an_error_at_the_guid_conversion() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");

    let err = store
        .revert_to(20251109080411)
        .expect_err("the GUID conversion must refuse to revert");
    match err {
        SchemaError::Irreversible { version, name } => {
            assert_eq!(version, 20251113172733);
            assert_eq!(name, "material_ids_to_guid");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Everything newer was undone and its ledger rows removed; the
    // irreversible step and its ancestors stay applied.
    let applied = store.applied().expect("ledger");
    assert_eq!(applied.len(), 6);
    assert_eq!(applied.last().map(|m| m.version), Some(20251113172733));

    let conn = store.connection();
    assert!(!table_exists(conn, "navigation_menu_items").expect("introspect"));
    assert!(!table_exists(conn, "checklists").expect("introspect"));
    let declared_type: String = conn
        .query_row(
            "SELECT type FROM pragma_table_info('materials') WHERE name = 'material_id'",
            [],
            |row| row.get(0),
        )
        .expect("materials.material_id type");
    assert_eq!(declared_type, "TEXT");
}

#[test]
fn revert_on_an_empty_database_reports_nothing_applied() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    let err = store.revert_last().expect_err("nothing to revert");
    assert!(matches!(err, SchemaError::NothingApplied));
}

#[test]
fn revert_to_an_unapplied_target_is_refused() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_steps(3).expect("apply a few");
    let err = store
        .revert_to(20260120184159)
        .expect_err("target newer than anything applied");
    assert!(matches!(err, SchemaError::Plan(_)));
}
